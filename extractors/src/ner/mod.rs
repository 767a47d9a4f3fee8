use regex::Regex;
use shared_types::{EntityLabel, EntityRecognizer, NamedEntity};

use crate::resume_fields::GEOGRAPHY_TOKENS;

/// Heuristic named-entity recognizer.
///
/// Tags runs of 2-4 capitalized alphabetic tokens. Runs containing a
/// gazetteer geography token are labeled `Location`, everything else
/// `Person`. This stands in for a statistical NER model: the regex is
/// compiled once at construction and the instance is read-only afterwards,
/// so one recognizer serves the whole process.
pub struct RuleBasedRecognizer {
    capitalized_run: Regex,
    gazetteer: Vec<String>,
}

impl RuleBasedRecognizer {
    pub fn new(gazetteer: Vec<String>) -> Self {
        Self {
            capitalized_run: Regex::new(r"\b[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3}\b").unwrap(),
            gazetteer: gazetteer.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GEOGRAPHY_TOKENS.iter().map(|t| t.to_string()).collect())
    }

    fn label_for(&self, span: &str) -> EntityLabel {
        let span = span.to_lowercase();
        if self.gazetteer.iter().any(|token| span.contains(token)) {
            EntityLabel::Location
        } else {
            EntityLabel::Person
        }
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn find_entities(&self, text: &str) -> Vec<NamedEntity> {
        self.capitalized_run
            .find_iter(text)
            .map(|m| NamedEntity {
                text: m.as_str().to_string(),
                label: self.label_for(m.as_str()),
            })
            .collect()
    }
}
