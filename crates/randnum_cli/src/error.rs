//! CLI error types

use randnum_core::RandomNumbersError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generator(#[from] RandomNumbersError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
