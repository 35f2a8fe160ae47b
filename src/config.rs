//! Configuration for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for `play`, loaded from TOML.
///
/// ```toml
/// log_filter = "info"
/// show_analysis = true
/// max_rounds = 3
/// pause_ms = 1500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print every candidate score after each computer move.
    #[serde(default)]
    show_analysis: bool,

    /// Stop after this many finished rounds. Unlimited when absent.
    #[serde(default)]
    max_rounds: Option<u32>,

    /// Pause after the result banner, in milliseconds.
    #[serde(default)]
    pause_ms: u64,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(show_analysis = config.show_analysis, max_rounds = ?config.max_rounds, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides `show_analysis`, e.g. from a command-line flag.
    pub fn with_show_analysis(mut self, show_analysis: bool) -> Self {
        self.show_analysis = show_analysis;
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_analysis: false,
            max_rounds: None,
            pause_ms: 0,
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
