//! Error types for Shelfmark server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain error kinds carried on the wire alongside the HTTP status.
///
/// The kind, not the message, is the contract: handlers and clients branch on
/// it, the message is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorKind {
    None = 0,
    LibraryNotFound = 1,
    BookNotFound = 2,
    UserNotFound = 3,
    InvalidCredentials = 4,
    UserAlreadyExists = 5,
    LibraryAlreadyExists = 6,
    BadValue = 7,
    Failure = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Library not found: {0}")]
    LibraryNotFound(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Library already exists: {0}")]
    LibraryAlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// The wire-level kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Authentication(_) => ErrorKind::InvalidCredentials,
            AppError::UserNotFound(_) => ErrorKind::UserNotFound,
            AppError::LibraryNotFound(_) => ErrorKind::LibraryNotFound,
            AppError::BookNotFound(_) => ErrorKind::BookNotFound,
            AppError::UserAlreadyExists(_) => ErrorKind::UserAlreadyExists,
            AppError::LibraryAlreadyExists(_) => ErrorKind::LibraryAlreadyExists,
            AppError::Validation(_) => ErrorKind::BadValue,
            AppError::Database(_) | AppError::Internal(_) => ErrorKind::Failure,
        }
    }
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
        let kind = self.kind();
        let (status, message) = match &self {
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::UserNotFound(msg)
            | AppError::LibraryNotFound(msg)
            | AppError::BookNotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::UserAlreadyExists(msg) | AppError::LibraryAlreadyExists(msg) => {
                (StatusCode::CONFLICT, msg.clone())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: kind as u32,
            error: format!("{:?}", kind),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
