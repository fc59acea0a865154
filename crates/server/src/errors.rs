use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use common::metrics::SERVICE_ERRORS_TOTAL;
use service::errors::ServiceError;

/// Error body returned by every API route: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, message: impl Into<String>) -> Self {
        Self { status, title, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        SERVICE_ERRORS_TOTAL.with_label_values(&[err.kind()]).inc();
        let (status, title) = match &err {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "Invalid Input"),
            ServiceError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Storage Error"),
        };
        if status.is_server_error() {
            error!(code = err.code(), error = %err, "request failed");
        } else {
            debug!(code = err.code(), error = %err, "request rejected");
        }
        Self::new(status, title, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_http_statuses() {
        let cases = [
            (ServiceError::not_found("x"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("a@b.c".into()), StatusCode::CONFLICT),
            (ServiceError::InvalidInput { field: "name", reason: "name is required".into() }, StatusCode::BAD_REQUEST),
            (ServiceError::storage("disk full"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn message_carries_service_detail() {
        let api = ApiError::from(ServiceError::Conflict("alice@example.com".into()));
        assert_eq!(api.title, "Conflict");
        assert_eq!(api.message, "email already exists: alice@example.com");
    }
}
