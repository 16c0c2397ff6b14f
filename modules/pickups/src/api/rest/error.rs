use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::domain::error::DomainError;

/// JSON error body: `{"error": message}` with the mapped status code.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Map a domain error to an HTTP response; database details are logged, not exposed.
pub fn map_domain_error(e: &DomainError) -> ApiError {
    match e {
        DomainError::RequestNotFound { .. } | DomainError::UserNotFound { .. } => {
            ApiError::new(StatusCode::NOT_FOUND, e.to_string())
        }
        // Both the illegal edge and the lost race surface as 409: the caller's
        // view of the record is stale either way.
        DomainError::InvalidTransition { .. } | DomainError::Conflict { .. } => {
            ApiError::new(StatusCode::CONFLICT, e.to_string())
        }
        DomainError::NotAResident { .. } | DomainError::Validation { .. } => {
            ApiError::unprocessable(e.to_string())
        }
        DomainError::Database { .. } => {
            tracing::error!(error = %e, "Database error occurred");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
