//! Error types for the LMS server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed in error response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    InvalidEntry = 2,
    Duplicate = 3,
    NoSuchBook = 4,
    NotAvailable = 5,
    BadValue = 6,
}

/// Main application error type
///
/// Domain errors are decided exclusively in the service layer; the
/// repository signals absence with `Option`/empty collections instead.
/// Every variant is deterministic and scoped to a single request.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not available: {0}")]
    NotAvailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // NotFound maps to 400 rather than 404: clients of the original
        // API treat an unknown isbn as a bad request, not a missing route.
        let (status, code, message) = match &self {
            AppError::InvalidEntry(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidEntry, msg.clone())
            }
            AppError::AlreadyExists(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::Duplicate, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::NoSuchBook, msg.clone())
            }
            AppError::NotAvailable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NotAvailable, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
