//! Calculation error types

use thiserror::Error;

/// Errors raised while validating inputs or assembling a recipe
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixError {
    /// Out-of-range or malformed sample count, excess or mix concentration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Constants produced an impossible recipe (e.g. negative diluent)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl MixError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        MixError::InvalidArgument(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        MixError::InvalidConfiguration(msg.into())
    }
}

/// Result type for calculation operations
pub type MixResult<T> = Result<T, MixError>;
