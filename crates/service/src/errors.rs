use std::fmt::Display;

use thiserror::Error;

use models::errors::ModelError;

/// Failures surfaced by the user and todo services.
///
/// Every variant is recoverable at the transport boundary; `Storage` wraps
/// backend failures verbatim and is never retried here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("email already exists: {0}")]
    Conflict(String),
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(identifier: impl Display) -> Self { Self::NotFound(identifier.to_string()) }

    pub fn storage(err: impl Display) -> Self { Self::Storage(err.to_string()) }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::InvalidInput { .. } => "invalid_input",
            ServiceError::Storage(_) => "storage",
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidInput { .. } => 1001,
            ServiceError::Conflict(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation { field, reason } => Self::InvalidInput { field, reason },
            ModelError::Duplicate(detail) => Self::Conflict(detail),
            ModelError::Db(detail) => Self::Storage(detail),
        }
    }
}
