pub mod exports;
pub mod resumes;

use extractors::ResumePipeline;
use std::path::PathBuf;
use std::sync::Arc;

use crate::helpers::export::ExportFormat;

/// Shared, read-only application state.
///
/// The pipeline (and the recognizer inside it) is built once at startup and
/// never mutated, so it is shared across workers without locking.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ResumePipeline>,
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
}
