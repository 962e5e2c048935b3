//! Configuration error types.

use crate::config::validate::ConfigViolation;
use thiserror::Error;

/// Errors that can occur while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was not valid JSON or did not have the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is internally inconsistent
    #[error("Configuration has {} violation(s)", .violations.len())]
    Invalid { violations: Vec<ConfigViolation> },
}
