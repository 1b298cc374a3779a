//! Static widget configuration.
//!
//! Defaults are compiled in. An optional `widget.json` in the platform config
//! directory may override any field; it is read once at startup and never
//! written back.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::replies::ReplyBook;

pub const CONFIG_FILE_NAME: &str = "widget.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reply delay range is empty ({min}ms..{max}ms)")]
    InvalidTimings { min: u64, max: u64 },
    #[error("reply pool has no entries")]
    EmptyReplyPool,
    #[error("invalid color token '{0}' (expected #rrggbb)")]
    InvalidColor(String),
}

/// Color tokens as `#rrggbb` strings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Palette {
    /// Gradient start of the brand color (launcher, user bubbles, buttons)
    pub brand_start: String,
    /// Gradient end of the brand color
    pub brand_end: String,
    pub accent: String,
    pub notification: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brand_start: "#2563eb".into(),
            brand_end: "#3b82f6".into(),
            accent: "#2563eb".into(),
            notification: "#ec4899".into(),
        }
    }
}

impl Palette {
    fn tokens(&self) -> [&str; 4] {
        [
            self.brand_start.as_str(),
            self.brand_end.as_str(),
            self.accent.as_str(),
            self.notification.as_str(),
        ]
    }
}

/// Continuation delays, in milliseconds
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct Timings {
    pub reset_delay_ms: u64,
    pub reply_delay_min_ms: u64,
    /// Exclusive upper bound
    pub reply_delay_max_ms: u64,
    pub topic_reply_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reset_delay_ms: 800,
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
            topic_reply_delay_ms: 1200,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub brand_name: String,
    /// Name the assistant addresses the user by
    pub user_name: String,
    pub bot_avatar: String,
    pub welcome_emoji: String,
    pub notification_dot: bool,
    pub palette: Palette,
    pub timings: Timings,
    pub replies: ReplyBook,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            brand_name: "Geolume".into(),
            user_name: "Amigo".into(),
            bot_avatar: "🌍".into(),
            welcome_emoji: "👋".into(),
            notification_dot: true,
            palette: Palette::default(),
            timings: Timings::default(),
            replies: ReplyBook::default(),
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timings;
        if t.reply_delay_max_ms <= t.reply_delay_min_ms {
            return Err(ConfigError::InvalidTimings {
                min: t.reply_delay_min_ms,
                max: t.reply_delay_max_ms,
            });
        }
        if self.replies.pool.iter().all(|r| r.trim().is_empty()) {
            return Err(ConfigError::EmptyReplyPool);
        }
        for token in self.palette.tokens() {
            if parse_hex_color(token).is_none() {
                return Err(ConfigError::InvalidColor(token.to_string()));
            }
        }
        Ok(())
    }
}

/// Parse `#rrggbb` (leading `#` optional) into RGB bytes.
pub fn parse_hex_color(token: &str) -> Option<[u8; 3]> {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "geolume", "geolume-chat")
        .map(|proj| proj.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and validate a config file.
pub fn load_config_from(path: &Path) -> Result<WidgetConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: WidgetConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load the override file if present, otherwise the built-in defaults.
pub fn load_config() -> WidgetConfig {
    let Some(path) = config_path() else {
        return WidgetConfig::default();
    };
    if !path.exists() {
        debug!(path = %path.display(), "no widget config, using defaults");
        return WidgetConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring widget config");
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_delay_range_rejected() {
        let mut config = WidgetConfig::default();
        config.timings.reply_delay_min_ms = 2000;
        config.timings.reply_delay_max_ms = 1000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimings { min: 2000, max: 1000 })
        ));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let mut config = WidgetConfig::default();
        config.replies.pool = vec!["  ".into()];
        assert!(matches!(config.validate(), Err(ConfigError::EmptyReplyPool)));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut config = WidgetConfig::default();
        config.palette.accent = "blue-600".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2563eb"), Some([0x25, 0x63, 0xeb]));
        assert_eq!(parse_hex_color("ffffff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{ "user_name": "Ana", "timings": { "reset_delay_ms": 300 } }"#)
                .unwrap();
        assert_eq!(config.user_name, "Ana");
        assert_eq!(config.brand_name, "Geolume");
        assert_eq!(config.timings.reset_delay_ms, 300);
        assert_eq!(config.timings.topic_reply_delay_ms, 1200);
        assert_eq!(config.replies.quick_topics.len(), 4);
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let path = std::env::temp_dir().join("geolume-chat-definitely-missing.json");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "geolume-chat-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "brand_name": "Atlas" }"#).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.brand_name, "Atlas");
        let _ = fs::remove_file(&path);
    }
}
