//! Board configuration
//!
//! Loaded once at startup from the user's config directory:
//! - Linux: ~/.config/reference-board/config.json
//! - macOS: ~/Library/Application Support/reference-board/config.json
//! - Windows: %APPDATA%\reference-board\config.json
//!
//! Only display preferences live here. Entries are never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BoardError, Result};

/// Color theme for the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub theme: ThemeChoice,

    /// Width of one entry card in the grid (px)
    #[serde(default = "default_card_width")]
    pub card_width: f32,

    /// Height of the image area inside a card (px)
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: f32,

    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_card_width() -> f32 {
    260.0
}

fn default_thumbnail_height() -> f32 {
    180.0
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            card_width: default_card_width(),
            thumbnail_height: default_thumbnail_height(),
            log_filter: default_log_filter(),
        }
    }
}

impl BoardConfig {
    /// Path where the config file is expected, if a config directory exists
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("reference-board");
        path.push("config.json");
        Some(path)
    }

    /// Load the config from `path`.
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: BoardConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location.
    ///
    /// Called before logging is up, so the caller reports any error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.card_width.is_finite() && self.card_width > 0.0) {
            return Err(BoardError::Config(format!(
                "card_width must be positive, got {}",
                self.card_width
            )));
        }
        if !(self.thumbnail_height.is_finite() && self.thumbnail_height > 0.0) {
            return Err(BoardError::Config(format!(
                "thumbnail_height must be positive, got {}",
                self.thumbnail_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "theme": "light", "card_width": 320 }}"#).unwrap();

        let config = BoardConfig::from_file(&path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.card_width, 320.0);
        assert_eq!(config.thumbnail_height, 180.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "card_width": -5 }"#).unwrap();

        let err = BoardConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = BoardConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, BoardError::Json(_)));
    }
}
