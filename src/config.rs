//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`HanoiGame`](crate::HanoiGame).
///
/// ```toml
/// disk_count = 5
/// check_invariants = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of disks a new game starts with (1-12).
    #[serde(default = "default_disk_count")]
    disk_count: u8,

    /// Verify every invariant after each applied move.
    #[serde(default = "default_check_invariants")]
    check_invariants: bool,
}

fn default_disk_count() -> u8 {
    3
}

fn default_check_invariants() -> bool {
    cfg!(debug_assertions)
}

impl EngineConfig {
    /// Creates a configuration for `disk_count` disks.
    pub fn new(disk_count: u8) -> Self {
        Self {
            disk_count,
            check_invariants: default_check_invariants(),
        }
    }

    /// Turns postcondition checking on or off.
    pub fn with_check_invariants(mut self, check_invariants: bool) -> Self {
        self.check_invariants = check_invariants;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(disk_count = config.disk_count, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(default_disk_count())
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
