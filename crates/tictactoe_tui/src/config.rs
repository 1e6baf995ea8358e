//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so a config file only needs the keys it
/// changes and a missing file is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Start a new round automatically after a win or draw.
    auto_reset: bool,

    /// Delay before the automatic new round, in milliseconds.
    auto_reset_delay_ms: u64,

    /// How long the UI waits for a key before redrawing, in milliseconds.
    tick_rate_ms: u64,

    /// File that receives log output while the TUI owns the terminal.
    log_file: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auto_reset: true,
            auto_reset_delay_ms: 3000,
            tick_rate_ms: 100,
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::from_file(path)?;
            info!(?config, "Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Delay before the automatic new round, or `None` when disabled.
    pub fn auto_reset_delay(&self) -> Option<Duration> {
        self.auto_reset
            .then(|| Duration::from_millis(self.auto_reset_delay_ms))
    }

    /// Key polling interval for the UI loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than zero".to_string()));
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
