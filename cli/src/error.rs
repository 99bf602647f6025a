//! CLI error handling
//!
//! Wraps calculator rejections and the I/O around them, and maps each to a
//! process exit code.

use studio_metrics_shared::InvalidInput;
use thiserror::Error;

/// Exit code for rejected measurements
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for everything else
pub const EXIT_FAILURE: u8 = 1;

/// Command error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("{failed} of {total} batch rows were rejected")]
    BatchRowsRejected { failed: usize, total: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidInput(_) | CliError::BatchRowsRejected { .. } => EXIT_INVALID_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for commands
pub type CliResult<T> = Result<T, CliError>;
