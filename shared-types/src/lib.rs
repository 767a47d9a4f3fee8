use serde::{Deserialize, Serialize};

pub mod entity;
pub mod extraction;
pub mod record;

pub use entity::{EntityLabel, EntityRecognizer, NamedEntity};
pub use extraction::ExtractionError;
pub use record::{ExtractedRecord, ParseResumeResponse, NOT_FOUND};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
