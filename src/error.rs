//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// Every variant carries the operation-specific human-readable message
/// composed at the service layer, so the boundary only has to pick the
/// HTTP status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required `name` field absent or empty
    #[error("{0}")]
    MissingName(String),

    /// `readPage` greater than `pageCount`
    #[error("{0}")]
    ReadPageExceedsPageCount(String),

    #[error("{0}")]
    NotFound(String),

    /// Record could not be appended to the store
    #[error("{0}")]
    InsertFailure(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always "fail"
    pub status: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingName(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ReadPageExceedsPageCount(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InsertFailure(msg) => {
                tracing::error!("Insert failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            status: "fail".to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
