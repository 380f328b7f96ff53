//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Malformed analysis input: {0}")]
    MalformedInput(String),

    #[error("Invalid evaluator configuration: {0}")]
    InvalidConfiguration(String),
}

impl ClaimError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ClaimError::MalformedInput(message.into())
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ClaimError::InvalidConfiguration(message.into())
    }
}
