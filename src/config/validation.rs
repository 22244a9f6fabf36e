//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Status lines must be non-empty and fit on one line
//! - Log level must be one `tracing` understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WaitConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::WaitConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("messages.{0} must not be empty")]
    EmptyMessage(&'static str),

    #[error("messages.{0} must be a single line")]
    MultilineMessage(&'static str),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &WaitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, message) in [
        ("startup", &config.messages.startup),
        ("shutdown", &config.messages.shutdown),
    ] {
        if message.trim().is_empty() {
            errors.push(ValidationError::EmptyMessage(field));
        } else if message.contains('\n') || message.contains('\r') {
            errors.push(ValidationError::MultilineMessage(field));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
