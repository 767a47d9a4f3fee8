//! Extractors Crate
//!
//! This crate provides the field-extraction pipeline for pulling structured
//! candidate information out of plain resume text. It is designed to be
//! reusable outside the HTTP service.
//!
//! # Architecture
//!
//! - **Types**: The record shape and the `EntityRecognizer` trait are
//!   defined in the `shared-types` crate
//! - **Implementations**: Concrete extractors are implemented in this crate
//!
//! # Available Extractors
//!
//! - `ResumePipeline`: runs the email, phone, name, and skills extractors
//!   over one document's text and assembles an `ExtractedRecord`
//! - `RuleBasedRecognizer`: heuristic named-entity recognizer backing the
//!   name extractor's fallback stage
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::ResumePipeline;
//!
//! let pipeline = ResumePipeline::with_defaults();
//! let record = pipeline.parse(&resume_text);
//! ```

pub mod ner;
pub mod resume_fields;

// Re-export commonly used types
pub use ner::RuleBasedRecognizer;
pub use resume_fields::{PipelineConfig, ResumePipeline};

// Re-export the recognizer trait from shared-types for convenience
pub use shared_types::EntityRecognizer;
