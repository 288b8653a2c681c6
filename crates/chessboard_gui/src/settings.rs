//! User settings loaded from an optional JSON file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "CHESSBOARD_SETTINGS";
/// Fallback settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "chessboard.json";

const MIN_SQUARE_SIZE: f32 = 24.0;
const MAX_SQUARE_SIZE: f32 = 160.0;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of one board square in logical pixels
    pub square_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Start with black at the bottom
    pub flipped: bool,
    /// Mark the squares the selected piece may go to
    pub show_highlights: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            square_size: 70.0,
            window_width: 900.0,
            window_height: 640.0,
            flipped: false,
            show_highlights: true,
        }
    }
}

impl Settings {
    /// Settings file location: `$CHESSBOARD_SETTINGS`, else `chessboard.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    /// Reads settings from `path`. A missing file yields `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json(&json).map(Some)
    }

    /// Loads from [`Settings::path`], falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let path = Self::path();
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(error = ?e, "could not load settings, using defaults");
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.square_size = if self.square_size.is_finite() {
            self.square_size.clamp(MIN_SQUARE_SIZE, MAX_SQUARE_SIZE)
        } else {
            Self::default().square_size
        };
        self
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
