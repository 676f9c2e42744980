//! App settings loaded from an optional JSON file.
//!
//! There are no CLI flags; a `ballpit.json` next to the binary can override
//! the window setup and RNG seed. A missing or malformed file falls back to
//! defaults with a log line, never an abort.

use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Default settings file path, relative to the working directory.
pub const SETTINGS_PATH: &str = "ballpit.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub rng_seed: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_title: "ballpit".to_string(),
            window_width: 1280.0,
            window_height: 720.0,
            rng_seed: 12345,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppSettings {
    /// Loads settings from the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Loads `ballpit.json` if present, otherwise returns defaults.
    pub fn load_or_default() -> Self {
        match Self::load(SETTINGS_PATH) {
            Ok(settings) => settings,
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no {SETTINGS_PATH}, using default settings");
                Self::default()
            }
            Err(err) => {
                warn!("ignoring {SETTINGS_PATH}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = AppSettings::default();
        assert_eq!(settings.window_title, "ballpit");
        assert!(settings.window_width > 0.0 && settings.window_height > 0.0);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"rng_seed": 7}"#).unwrap();
        assert_eq!(settings.rng_seed, 7);
        assert_eq!(settings.window_width, 1280.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AppSettings, _> = serde_json::from_str(r#"{"windw_title": "x"}"#);
        assert!(result.is_err());
    }
}
