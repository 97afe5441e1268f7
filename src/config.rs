//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::transfer::Settlement;

const DEFAULT_ERROR_LOG: &str = "exception_log.txt";

/// Driver configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File that receives error records
    pub error_log_path: PathBuf,

    /// Settlement policy for the scenario transfer
    pub settlement: Settlement,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_log_path: PathBuf::from(DEFAULT_ERROR_LOG),
            settlement: Settlement::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let error_log_path = lookup("FUNDS_TRANSFER_ERROR_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ERROR_LOG));

        let settlement = match lookup("FUNDS_TRANSFER_SETTLEMENT") {
            Some(value) => parse_settlement(&value)?,
            None => Settlement::default(),
        };

        Ok(Self {
            error_log_path,
            settlement,
        })
    }
}

fn parse_settlement(value: &str) -> Result<Settlement, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "atomic" => Ok(Settlement::Atomic),
        "legacy" => Ok(Settlement::Legacy),
        _ => Err(ConfigError::InvalidValue("FUNDS_TRANSFER_SETTLEMENT")),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
