use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;
use shared_types::ParseResumeResponse;

use crate::errors::ApiError;
use crate::handlers::AppState;
use crate::helpers::export;
use crate::helpers::text_extraction::{self, DocumentKind};

/// `POST /api/resumes/parse`
///
/// Accepts one PDF or DOCX file as `multipart/form-data`, extracts the text,
/// runs the field-extraction pipeline, writes the export file, and returns
/// the record. Each request is a single linear pass; nothing is persisted.
pub async fn parse_resume(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let (filename, kind, data) = read_document_field(&mut payload).await?;

    tracing::info!("Parsing uploaded resume {} ({} bytes)", filename, data.len());

    // Document parsing is blocking and CPU-bound.
    let text = web::block(move || text_extraction::extract_text(kind, &data))
        .await
        .map_err(|e| ApiError::Blocking(e.to_string()))??;

    let record = state.pipeline.parse(&text);

    let export_record = record.clone();
    let export_dir = state.export_dir.clone();
    let export_format = state.export_format;
    let export_file =
        web::block(move || export::write_record(&export_record, &export_dir, export_format))
            .await
            .map_err(|e| ApiError::Blocking(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ParseResumeResponse {
        record,
        source_file: filename,
        export_file,
    }))
}

/// Pull the first file field out of the multipart payload and buffer it.
async fn read_document_field(
    payload: &mut Multipart,
) -> Result<(String, DocumentKind, Vec<u8>), ApiError> {
    while let Some(mut field) = payload.try_next().await? {
        let filename = match field.content_disposition().get_filename() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let content_type = field.content_type().map(|m| m.to_string());

        let kind =
            DocumentKind::from_upload(&filename, content_type.as_deref()).ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "Unsupported document type for {filename}; upload a PDF or DOCX file"
                ))
            })?;

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        return Ok((filename, kind, data));
    }

    Err(ApiError::BadRequest(
        "No file field found in multipart payload".to_string(),
    ))
}
