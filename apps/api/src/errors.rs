use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The extraction variants are all terminal for the current import attempt:
/// nothing is retried, and the shared resume state is untouched when any of
/// them fires (extraction runs before the parser gets write access).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file format. Please upload PDF or DOCX.")]
    UnsupportedFormat,

    #[error("{0} extraction is not available in this build")]
    ExtractionUnavailable(&'static str),

    #[error("Could not extract text from file.")]
    EmptyDocument,

    /// Backend I/O or malformed-document failure, carrying the reader's
    /// original message so the user sees what actually went wrong.
    #[error("Failed to extract text: {0}")]
    Extraction(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                self.to_string(),
            ),
            AppError::ExtractionUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "EXTRACTION_UNAVAILABLE",
                self.to_string(),
            ),
            AppError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_DOCUMENT",
                self.to_string(),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    self.to_string(),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
