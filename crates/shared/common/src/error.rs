//! Unified error handling for the HTTP surface.
//!
//! Converts domain errors into Axum responses with a stable error envelope:
//! handlers pick status codes from the variant alone, never from message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::CatalogError;
use serde::Serialize;
use thiserror::Error;

/// Application error types for the HTTP layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// Referenced resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Resource already exists
    #[error("{0} already exists")]
    Conflict(String),

    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Malformed request (bad path parameter, undecodable body)
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// Internal failure; details are logged, not surfaced
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for the client.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details).
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidInput { .. } => AppError::Validation(err.to_string()),
            CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CatalogError::Conflict { entity } => AppError::Conflict(entity.to_string()),
            CatalogError::Internal { source } => AppError::Internal(source.to_string()),
        }
    }
}

/// Result type alias.
pub type AppResult<T> = Result<T, AppError>;
