use serde::{Deserialize, Serialize};

/// Semantic categories a recognizer can assign to a span of text.
///
/// Only `Person` is consumed by the name extractor's fallback stage; the
/// other labels exist so recognizers can classify spans they must reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityLabel {
    Person,
    Location,
    Other,
}

/// A tagged span of text produced by an [`EntityRecognizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: EntityLabel,
}

/// Named-entity recognition collaborator.
///
/// Implementations are constructed once at process startup (any expensive
/// model load happens there) and are read-only afterwards, so a single
/// instance can be shared across requests behind an `Arc` without locking.
pub trait EntityRecognizer: Send + Sync {
    /// Return all tagged entities in document order.
    fn find_entities(&self, text: &str) -> Vec<NamedEntity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label_serialization() {
        let label = EntityLabel::Person;
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"person\"");

        let back: EntityLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }
}
