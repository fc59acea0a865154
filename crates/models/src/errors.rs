use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error on {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("unique constraint violated: {0}")]
    Duplicate(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    /// Classify a SeaORM error, surfacing unique violations separately so callers
    /// can report them as conflicts rather than opaque failures.
    pub fn from_db(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => Self::Duplicate(detail),
            _ => Self::Db(err.to_string()),
        }
    }
}
