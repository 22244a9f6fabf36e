//! Error types for the blocking entry point.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that can end a run other than the interrupt itself.
#[derive(Debug, Error)]
pub enum WaitError {
    /// Writing a status line to the output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// The interrupt hook could not be registered with the OS.
    #[error("Failed to install interrupt handler: {0}")]
    Signal(std::io::Error),

    /// The configuration handed to `run` failed validation.
    #[error("Invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    /// The entry point already finished its one run.
    #[error("Entry point already terminated")]
    AlreadyTerminated,
}

/// Result type for entry point operations.
pub type WaitResult<T> = Result<T, WaitError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<Vec<ValidationError>> for WaitError {
    fn from(errors: Vec<ValidationError>) -> Self {
        WaitError::Config(errors)
    }
}
