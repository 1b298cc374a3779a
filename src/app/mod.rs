//! Application module structure for ChatWidgetApp
//!
//! - `core`: ChatWidgetApp struct, backend thread and action dispatch
//! - `events`: Draining fired continuations from the backend
//! - `update`: eframe update loop, host page and widget placement

pub mod core;
pub mod events;
pub mod update;

// Re-export ChatWidgetApp for public API
pub use core::ChatWidgetApp;
