//! HTTP error handling and response types.
//!
//! Every error leaves the server as `{"detail": "<message>"}`. Storage
//! failures are logged in full but only a fixed message reaches the client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::db::repository::RepositoryError;
use crate::services::CalculationError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (malformed body, bad path id, division by zero)
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error; the message is safe to show to clients
    Internal(String),
    /// Known route, unsupported method
    MethodNotAllowed,
}

impl AppError {
    /// Log a storage failure and turn it into a 500 with a fixed message.
    pub fn storage(message: &str, err: RepositoryError) -> Self {
        tracing::error!(error = %err, "{}", message);
        AppError::Internal(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => msg,
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::Arithmetic(e) => AppError::BadRequest(e.to_string()),
            CalculationError::Storage(e) => AppError::storage("Failed to save calculation", e),
        }
    }
}
