//! Application configuration loaded from TOML.

use crate::timer::DEFAULT_TICK_PERIOD;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Settings for a game run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Milliseconds between game clock ticks.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,

    /// File the log is written to while the terminal UI is up.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Draw keypad digits in empty cells.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_tick_millis() -> u64 {
    DEFAULT_TICK_PERIOD.as_millis() as u64
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_hints: default_show_hints(),
        }
    }
}

impl AppConfig {
    /// Game clock period.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(tick_millis = config.tick_millis, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file given on the command line, or the default file if it exists.
    ///
    /// An explicit path must be readable. Without one, a missing
    /// [`DEFAULT_CONFIG_PATH`] means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Loads `explicit` if given, else `fallback` if it exists, else defaults.
    #[instrument]
    pub fn load_or_default(
        explicit: Option<&Path>,
        fallback: &Path,
    ) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.exists() => Self::from_file(fallback),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be greater than zero"));
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
