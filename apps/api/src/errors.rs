use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// User input is never rejected: missing fields become placeholders. The only
/// user-visible failure is a download of a file that does not exist.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::NotFound(name) => {
                tracing::debug!(name = %name, "Requested file not found");
                return (StatusCode::NOT_FOUND, "File not found.").into_response();
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                ("STORAGE_ERROR", "A storage error occurred")
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                ("RENDER_ERROR", "The document could not be rendered")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "An internal server error occurred")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
