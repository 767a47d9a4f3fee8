use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::handlers::AppState;
use crate::helpers::export::ExportFormat;

/// `GET /api/exports/{filename}`
///
/// Serves a previously generated export file as an attachment.
pub async fn download_export(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let filename = path.into_inner();

    if !is_safe_filename(&filename) {
        return Err(ApiError::BadRequest("Invalid export filename".to_string()));
    }

    let format = ExportFormat::from_filename(&filename)
        .ok_or_else(|| ApiError::BadRequest("Invalid export filename".to_string()))?;

    let full_path = state.export_dir.join(&filename);
    let bytes = web::block(move || std::fs::read(full_path))
        .await
        .map_err(|e| ApiError::Blocking(e.to_string()))?
        .map_err(|e| ApiError::NotFound(format!("{filename}: {e}")))?;

    Ok(HttpResponse::Ok()
        .content_type(format.mime_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes))
}

/// Only plain filenames are served; anything path-like is rejected.
fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && !filename.contains("..")
}
