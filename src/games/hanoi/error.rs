//! Errors for game construction and reconfiguration.

use super::action::ErrorKind;
use super::types::{MAX_DISKS, MIN_DISKS};
use crate::config::ConfigError;
use derive_more::{Display, Error, From};

/// Requested disk count is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "disk count must be between {} and {} (got {}); 12 disks already require 4095 moves",
    MIN_DISKS,
    MAX_DISKS,
    requested
)]
pub struct DiskCountError {
    /// The rejected disk count.
    pub requested: u8,
}

impl DiskCountError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Range
    }
}

/// Validates a disk count against the supported range.
pub fn check_disk_count(requested: u8) -> Result<u8, DiskCountError> {
    if (MIN_DISKS..=MAX_DISKS).contains(&requested) {
        Ok(requested)
    } else {
        Err(DiskCountError { requested })
    }
}

/// Any error that can occur while building a game.
#[derive(Debug, Clone, Display, Error, From)]
pub enum HanoiError {
    /// The configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),
    /// The configured disk count is out of range.
    #[display("{}", _0)]
    DiskCount(DiskCountError),
}
