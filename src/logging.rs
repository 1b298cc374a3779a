//! Diagnostic logging setup.
//!
//! The widget logs through `tracing`. Verbosity follows `RUST_LOG`, falling
//! back to `geolume_chat=info` when unset or unparsable.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "geolume_chat=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .try_init();
}
