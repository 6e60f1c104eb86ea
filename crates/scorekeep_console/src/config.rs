//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use scorekeep_tictactoe::Marker;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Name used for X when the player leaves the name prompt empty.
    #[serde(default = "default_name_x")]
    default_name_x: String,

    /// Name used for O when the player leaves the name prompt empty.
    #[serde(default = "default_name_o")]
    default_name_o: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_name_x() -> String {
    "Player X".to_string()
}

fn default_name_o() -> String {
    "Player O".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            default_name_x: default_name_x(),
            default_name_o: default_name_o(),
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Emits no tracing events: it runs before the subscriber is installed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Fallback name for the contestant playing `marker`.
    pub fn default_name(&self, marker: Marker) -> &str {
        match marker {
            Marker::X => &self.default_name_x,
            Marker::O => &self.default_name_o,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
