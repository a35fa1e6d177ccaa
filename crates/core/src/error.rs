// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] crate::domain::QueueError),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for input the caller can fix (bad parameters, unstable load,
    /// empty scan); false for faults on our side
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::Config(_) | AppError::Internal(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
