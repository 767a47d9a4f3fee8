//! Single-row tabular export of an extracted record.
//!
//! Fixed columns `Name, Email, Phone, Skills, Profile Link`; missing scalar
//! fields render as `"Not Found"` and skills are comma-joined. Filenames
//! embed a timestamp so repeated runs never collide.

use chrono::Local;
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use shared_types::ExtractedRecord;
use std::path::Path;

pub const EXPORT_COLUMNS: [&str; 5] = ["Name", "Email", "Phone", "Skills", "Profile Link"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv",
        }
    }

    /// Recover the format from an export filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".xlsx") {
            Some(Self::Xlsx)
        } else if filename.ends_with(".csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// The export write failed. Fatal to the request; there is no partial
/// success and no retry.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `resume_<YYYYmmdd_HHMMSS>.<ext>` in local time.
pub fn export_filename(format: ExportFormat) -> String {
    format!(
        "resume_{}.{}",
        Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Write `record` as a one-row table under `dir` and return the filename.
pub fn write_record(
    record: &ExtractedRecord,
    dir: &Path,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let filename = export_filename(format);
    let path = dir.join(&filename);

    match format {
        ExportFormat::Xlsx => write_xlsx(record, &path)?,
        ExportFormat::Csv => write_csv(record, &path)?,
    }

    tracing::info!("Export written to {}", path.display());
    Ok(filename)
}

fn row_values(record: &ExtractedRecord) -> [String; 5] {
    [
        record.display_name().to_string(),
        record.display_email().to_string(),
        record.display_phone().to_string(),
        record.skills_joined(),
        record.profile_link.clone(),
    ]
}

fn write_xlsx(record: &ExtractedRecord, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (col, value) in row_values(record).iter().enumerate() {
        worksheet.write_string(1, col as u16, value)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_csv(record: &ExtractedRecord, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(EXPORT_COLUMNS)?;
    writer.write_record(row_values(record))?;
    writer.flush()?;
    Ok(())
}
