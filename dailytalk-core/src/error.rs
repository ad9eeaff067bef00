//! Error types for dailytalk-core

use thiserror::Error;

/// Convenience alias for core results
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Top-level error type for the activity provider core
#[derive(Debug, Error)]
pub enum ActivityError {
    /// A required argument was missing or empty
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No activity has been deployed under the given id
    #[error("unknown activityID: {0}. Deploy first.")]
    NotFound(String),

    /// The submission payload was present but not a JSON object
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// A submission field could not be read as a number
    #[error("invalid field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl ActivityError {
    /// Build a validation error for a single submission field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
