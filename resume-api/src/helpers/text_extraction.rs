//! Plain-text extraction from uploaded resume documents.
//!
//! PDF text comes from `pdf-extract`, DOCX text from walking the `docx-rs`
//! document tree. Every paragraph boundary emits one newline so the
//! line-oriented heading heuristic downstream sees the document's visual
//! structure. A document with no text layer (e.g. a scanned PDF) yields an
//! empty string, which is not an error: the field extractors simply miss.

use std::path::Path;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Select the parser from the declared content type, falling back to the
    /// filename extension.
    pub fn from_upload(filename: &str, content_type: Option<&str>) -> Option<Self> {
        match content_type {
            Some("application/pdf") => return Some(Self::Pdf),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document") => {
                return Some(Self::Docx)
            }
            _ => {}
        }

        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());

        match ext.as_deref() {
            Some("pdf") => Some(Self::Pdf),
            Some("docx") => Some(Self::Docx),
            _ => None,
        }
    }
}

/// The uploaded binary could not be parsed. Fatal to the request; never
/// converted into an empty-text record.
#[derive(Debug, thiserror::Error)]
pub enum TextExtractionError {
    #[error("Failed to parse PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Failed to parse PDF: extraction panicked, likely a malformed font")]
    PdfPanic,

    #[error("Failed to parse DOCX: {0}")]
    Docx(String),
}

pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, TextExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Docx => extract_docx(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, TextExtractionError> {
    // pdf-extract (and its font parser) can panic on certain fonts/glyphs;
    // contain the panic so the request fails as a parse error.
    let text = contain_pdf_panics(|| pdf_extract::extract_text_from_mem(bytes))?;
    tracing::debug!("PDF extraction produced {} chars", text.len());
    Ok(text)
}

fn contain_pdf_panics<F>(parse: F) -> Result<String, TextExtractionError>
where
    F: FnOnce() -> Result<String, pdf_extract::OutputError>,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(parse)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(TextExtractionError::Pdf(e)),
        Err(_panic) => {
            tracing::error!("PDF extraction panicked, likely a malformed font");
            Err(TextExtractionError::PdfPanic)
        }
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, TextExtractionError> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| TextExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &doc.document.children {
        append_docx_child(child, &mut text);
    }

    tracing::debug!("DOCX extraction produced {} chars", text.len());
    Ok(text)
}

fn append_docx_child(element: &docx_rs::DocumentChild, output: &mut String) {
    match element {
        docx_rs::DocumentChild::Paragraph(para) => {
            for child in &para.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    append_run(run, output);
                }
            }
            output.push('\n');
        }
        docx_rs::DocumentChild::Table(table) => {
            for row in &table.rows {
                let docx_rs::TableChild::TableRow(tr) = row;
                for cell in &tr.cells {
                    let docx_rs::TableRowChild::TableCell(tc) = cell;
                    for content in &tc.children {
                        if let docx_rs::TableCellContent::Paragraph(para) = content {
                            for child in &para.children {
                                if let docx_rs::ParagraphChild::Run(run) = child {
                                    append_run(run, output);
                                }
                            }
                            output.push('\n');
                        }
                    }
                }
            }
        }
        _ => {}
    }
}

fn append_run(run: &docx_rs::Run, output: &mut String) {
    for child in &run.children {
        if let docx_rs::RunChild::Text(text) = child {
            output.push_str(&text.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_from_content_type() {
        assert_eq!(
            DocumentKind::from_upload("anything.bin", Some("application/pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_upload(
                "resume",
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            ),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_document_kind_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::from_upload("resume.PDF", Some("application/octet-stream")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_upload("resume.docx", None),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_unsupported_upload_is_rejected() {
        assert_eq!(DocumentKind::from_upload("resume.txt", None), None);
        assert_eq!(
            DocumentKind::from_upload("resume", Some("image/png")),
            None
        );
    }

    #[test]
    fn test_malformed_docx_is_an_error() {
        let result = extract_text(DocumentKind::Docx, b"not a zip archive");
        assert!(matches!(result, Err(TextExtractionError::Docx(_))));
    }

    #[test]
    fn test_pdf_parser_panic_becomes_an_error() {
        let result = contain_pdf_panics(|| panic!("glyph table out of bounds"));
        assert!(matches!(result, Err(TextExtractionError::PdfPanic)));
    }

    #[test]
    fn test_contained_pdf_parse_passes_text_through() {
        let result = contain_pdf_panics(|| Ok("Arun Kumar\n".to_string()));
        assert_eq!(result.unwrap(), "Arun Kumar\n");
    }
}
