mod email;
mod name;
mod phone;
mod skills;

pub use email::EmailExtractor;
pub use name::{NameExtractor, GEOGRAPHY_TOKENS};
pub use phone::PhoneExtractor;
pub use skills::{SkillsExtractor, DEFAULT_SKILLS_VOCABULARY};

use crate::ner::RuleBasedRecognizer;
use serde::{Deserialize, Serialize};
use shared_types::{EntityRecognizer, ExtractedRecord, ExtractionError};
use std::sync::Arc;

/// Default placeholder profile link attached to every record.
pub const DEFAULT_PROFILE_LINK: &str = "https://www.linkedin.com/in/your-profile";

/// Tunable knobs of the field-extraction pipeline.
///
/// The whitespace flag folds the two observed behavior variants into one
/// pipeline: stripping joins line-wrapped addresses at the cost of merging
/// surrounding prose into the local part. Default is off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub strip_whitespace_before_email_match: bool,
    pub name_denylist: Vec<String>,
    pub skills_vocabulary: Vec<String>,
    pub profile_link: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strip_whitespace_before_email_match: false,
            name_denylist: GEOGRAPHY_TOKENS.iter().map(|t| t.to_string()).collect(),
            skills_vocabulary: DEFAULT_SKILLS_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
            profile_link: DEFAULT_PROFILE_LINK.to_string(),
        }
    }
}

/// Main resume pipeline running all four field extractors in sequence.
///
/// Stateless across calls: the record is a pure function of the input text.
/// The recognizer is built once (its construction is the expensive part) and
/// shared read-only across requests.
pub struct ResumePipeline {
    email: EmailExtractor,
    phone: PhoneExtractor,
    name: NameExtractor,
    skills: SkillsExtractor,
    recognizer: Arc<dyn EntityRecognizer>,
    profile_link: String,
}

impl ResumePipeline {
    /// Create a new pipeline with custom configuration and recognizer
    pub fn new(
        config: PipelineConfig,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Result<Self, ExtractionError> {
        // An empty term would substring-match every document.
        if config.skills_vocabulary.iter().any(|s| s.trim().is_empty()) {
            return Err(ExtractionError::ConfigError(
                "skills vocabulary entries must be non-empty".to_string(),
            ));
        }
        if config.name_denylist.iter().any(|t| t.trim().is_empty()) {
            return Err(ExtractionError::ConfigError(
                "name denylist tokens must be non-empty".to_string(),
            ));
        }

        Ok(Self {
            email: EmailExtractor::new(config.strip_whitespace_before_email_match),
            phone: PhoneExtractor::new(),
            name: NameExtractor::new(config.name_denylist),
            skills: SkillsExtractor::new(config.skills_vocabulary),
            recognizer,
            profile_link: config.profile_link,
        })
    }

    /// Create a new pipeline with default configuration
    pub fn with_defaults() -> Self {
        Self::new(
            PipelineConfig::default(),
            Arc::new(RuleBasedRecognizer::with_defaults()),
        )
        .expect("default pipeline configuration is valid")
    }

    /// Run all extractors against the same text and assemble the record.
    ///
    /// Individual misses become `None` / an empty set; they never abort the
    /// pipeline.
    pub fn parse(&self, text: &str) -> ExtractedRecord {
        ExtractedRecord {
            name: self.name.extract(text, self.recognizer.as_ref()),
            email: self.email.extract(text),
            phone: self.phone.extract(text),
            skills: self.skills.extract(text),
            profile_link: self.profile_link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "Arun Kumar\n\
Chennai, Tamil Nadu\n\
Email: arun.kumar@example.com | Phone: 9876543210\n\
\n\
Data analyst skilled in Python, SQL, Excel and Power BI.\n\
Built NLP and machine learning prototypes for churn analysis.";

    #[test]
    fn test_full_record_assembly() {
        let pipeline = ResumePipeline::with_defaults();
        let record = pipeline.parse(SAMPLE_RESUME);

        assert_eq!(record.name.as_deref(), Some("Arun Kumar"));
        assert_eq!(record.email.as_deref(), Some("arun.kumar@example.com"));
        assert_eq!(record.phone.as_deref(), Some("9876543210"));
        assert!(record.skills.contains("python"));
        assert!(record.skills.contains("sql"));
        assert!(record.skills.contains("excel"));
        assert!(record.skills.contains("power bi"));
        assert!(record.skills.contains("nlp"));
        assert!(record.skills.contains("machine learning"));
        assert_eq!(record.profile_link, DEFAULT_PROFILE_LINK);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let pipeline = ResumePipeline::with_defaults();
        let first = pipeline.parse(SAMPLE_RESUME);
        let second = pipeline.parse(SAMPLE_RESUME);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let pipeline = ResumePipeline::with_defaults();
        let record = pipeline.parse("");

        assert_eq!(record.name, None);
        assert_eq!(record.email, None);
        assert_eq!(record.phone, None);
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_empty_vocabulary_term_is_rejected() {
        let config = PipelineConfig {
            skills_vocabulary: vec!["python".to_string(), "  ".to_string()],
            ..PipelineConfig::default()
        };
        let result = ResumePipeline::new(config, Arc::new(RuleBasedRecognizer::with_defaults()));
        assert!(result.is_err());
    }

    #[test]
    fn test_address_first_resume_still_finds_name() {
        let pipeline = ResumePipeline::with_defaults();
        let record = pipeline.parse("Chennai, Tamil Nadu\nArun Kumar\n9876543210");
        assert_eq!(record.name.as_deref(), Some("Arun Kumar"));
    }
}
