//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned to clients for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code. The `Display` text of
/// the variant is exactly what the client sees in the `error` field, except
/// for `Internal`, whose detail is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Path id could not be parsed as an integer.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Invalid ID")]
    InvalidId,

    /// Create body is missing `suit`/`value`, or one of them is not a
    /// non-empty string.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Request body must include string fields \"suit\" and \"value\".")]
    InvalidCardBody,

    /// No card with the requested id exists.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Card not found")]
    CardNotFound,

    /// Unexpected fault while handling a request.
    ///
    /// Returns HTTP 500 with a generic message. The String is logged only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::InvalidCardBody => StatusCode::BAD_REQUEST,
            AppError::CardNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Build the `{ "error": message }` response used by every failure path.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Card not found" }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidId` → 400 Bad Request
/// - `InvalidCardBody` → 400 Bad Request
/// - `CardNotFound` → 404 Not Found
/// - `Internal` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Internal(ref detail) => {
                tracing::error!(%detail, "Request failed with internal error");
                error_response(status, INTERNAL_ERROR_MESSAGE)
            }
            _ => error_response(status, &self.to_string()),
        }
    }
}
