//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce `{ "error": ... }`
//! JSON bodies with appropriate status codes, and it is where store
//! failures are reclassified into fixed, category-level client messages.
//! Internal detail is logged before translation and never leaks to the
//! client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use todo_storage::StorageError;

/// API errors with uniform HTTP status code translation.
///
/// Variants carry internal detail for server-side logging; the client only
/// ever sees the fixed category message (or, for `BadRequest`, the
/// validation message itself).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client sent invalid input (400). The message is client-visible.
    #[error("{0}")]
    BadRequest(String),

    /// The request body was missing, mistyped, or not valid JSON (400).
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// No task matched the requested id (404).
    #[error("task not found: {0}")]
    NotFound(String),

    /// The store rejected the id value itself (400).
    #[error("invalid task id: {0}")]
    InvalidId(String),

    /// The store connection failed (500).
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// The store rejected or failed an otherwise-valid operation (500).
    #[error("database operation failed: {0}")]
    DatabaseOperation(String),

    /// Anything uncategorized (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) | ApiError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseConnection(_)
            | ApiError::DatabaseOperation(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed message sent to the client for this category.
    fn client_message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidBody(_) => "Invalid request body",
            ApiError::NotFound(_) => "Task not found",
            ApiError::InvalidId(_) => "Invalid task ID",
            ApiError::DatabaseConnection(_) => "Database connection error",
            ApiError::DatabaseOperation(_) => "Database operation failed",
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Full detail stays server-side; client errors log at a lower
        // severity than store/internal failures.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        let body = serde_json::json!({ "error": self.client_message() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // The parse detail is logged, never echoed to the client.
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        let detail = err.to_string();
        match err {
            StorageError::Connection(_) => ApiError::DatabaseConnection(detail),
            StorageError::InvalidKey(_) => ApiError::InvalidId(detail),
            StorageError::Serialization(_)
            | StorageError::Backend(_)
            | StorageError::Migration(_)
            | StorageError::Integrity { .. } => ApiError::DatabaseOperation(detail),
        }
    }
}
