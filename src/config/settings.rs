//! Notifier settings loaded from config.toml
//!
//! Everything here has a default, so the notifier runs without any config file at all.
//! When `config.toml` exists, its `[notifier]` table overrides individual fields:
//!
//! ```toml
//! [notifier]
//! role_name = "Aniketshare/Noti"
//! brand_color = 0x595967
//! rotation_interval_secs = 10
//!
//! [[notifier.statuses]]
//! kind = "playing"
//! name = "Designing in Photoshop 🎨"
//! ```

use crate::core::presence::{PresenceEntry, PresenceKind};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Top-level shape of config.toml
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Settings for the notifier bot
    #[serde(default)]
    pub notifier: NotifierSettings,
}

/// Tunables for the `/noti` command and the presence rotation
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifierSettings {
    /// Name of the guild role allowed to send notifications
    pub role_name: String,
    /// Text shown in the embed author line
    pub author_name: String,
    /// Embed side colour as `0xRRGGBB`
    pub brand_color: u32,
    /// Seconds between presence changes
    pub rotation_interval_secs: u64,
    /// Presence entries cycled in order; empty disables rotation
    pub statuses: Vec<PresenceEntry>,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            role_name: "Aniketshare/Noti".to_string(),
            author_name: "Notification from AniketwOw".to_string(),
            brand_color: 0x0059_5967,
            rotation_interval_secs: 10,
            statuses: vec![
                PresenceEntry::new(PresenceKind::Playing, "Designing in Photoshop 🎨"),
                PresenceEntry::new(PresenceKind::Watching, "Turning Ideas into Art ✨"),
                PresenceEntry::new(PresenceKind::Listening, "Creative Mode: ON ⚡"),
            ],
        }
    }
}

/// Parses a config document from a string.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the configuration from `path`.
///
/// A missing file is not an error and yields the defaults. Any other read failure or a
/// TOML syntax error is.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    match std::fs::read_to_string(path_ref) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config file at {:?}, using defaults", path_ref);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Loads the configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_when_table_missing() {
        let config = parse_config("").unwrap();
        assert_eq!(config.notifier.role_name, "Aniketshare/Noti");
        assert_eq!(config.notifier.brand_color, 0x0059_5967);
        assert_eq!(config.notifier.rotation_interval_secs, 10);
        assert_eq!(config.notifier.statuses.len(), 3);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let toml_str = r#"
            [notifier]
            role_name = "Couriers"
            brand_color = 0xFF0000

            [[notifier.statuses]]
            kind = "competing"
            name = "Deadlines"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.notifier.role_name, "Couriers");
        assert_eq!(config.notifier.brand_color, 0x00FF_0000);
        assert_eq!(config.notifier.author_name, "Notification from AniketwOw");
        assert_eq!(
            config.notifier.statuses,
            vec![PresenceEntry::new(PresenceKind::Competing, "Deadlines")]
        );
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let result = parse_config("[notifier\nrole_name = 1");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config("definitely/not/here/config.toml").unwrap();
        assert_eq!(config.notifier.role_name, "Aniketshare/Noti");
    }
}
