use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use shared_types::ErrorResponse;

use crate::helpers::export::ExportError;
use crate::helpers::text_extraction::TextExtractionError;

/// Application-level error type.
/// Implements `ResponseError` so handlers can return `Result<T, ApiError>`
/// and every failure reaches the client as an `ErrorResponse` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload error: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),

    #[error(transparent)]
    DocumentRead(#[from] TextExtractionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Export not found: {0}")]
    NotFound(String),

    #[error("Blocking task failed: {0}")]
    Blocking(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::DocumentRead(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Export(_) | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
