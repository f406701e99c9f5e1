//! Player-facing configuration for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the `play` command, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Number empty squares in rendered boards.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    human_name: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_hints() -> bool {
    true
}

fn default_human_name() -> String {
    "You".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_hints: default_show_hints(),
            human_name: default_human_name(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_name = %config.human_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
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
