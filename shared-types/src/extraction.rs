/// Extraction pipeline error types
///
/// Individual field misses are not errors; they surface as `None` inside the
/// record. These variants cover failures of the machinery itself.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
