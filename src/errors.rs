use std::result::Result as StdResult;

use fintrack_config::ConfigError;
use fintrack_core::CoreError;
use thiserror::Error;

/// Unified error type for the driver and its collaborators.
#[derive(Debug, Error)]
pub enum FintrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    Usage(String),
}

pub type Result<T> = StdResult<T, FintrackError>;
