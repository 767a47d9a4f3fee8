use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Display string used for scalar fields with no valid match.
///
/// Extractors return `None` internally; this literal only appears at the
/// presentation and export boundary.
pub const NOT_FOUND: &str = "Not Found";

/// Structured candidate information extracted from one resume document.
///
/// Fully determined by the input text: running the pipeline twice on the
/// same text yields an identical record. Never persisted or mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Deduplicated, order-independent set of matched vocabulary terms.
    pub skills: BTreeSet<String>,
    /// Constant placeholder, not derived from the input.
    pub profile_link: String,
}

impl ExtractedRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn display_phone(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Skills joined for tabular output, e.g. `"python, sql"`.
    pub fn skills_joined(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Response body for `POST /api/resumes/parse`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResumeResponse {
    pub record: ExtractedRecord,
    /// Original filename of the uploaded document.
    pub source_file: String,
    /// Filename of the generated export, served by `GET /api/exports/{filename}`.
    pub export_file: String,
}
