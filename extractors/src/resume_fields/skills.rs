use std::collections::BTreeSet;

/// Default skills vocabulary. Matching is naive substring containment, so
/// entries must not contain each other.
pub const DEFAULT_SKILLS_VOCABULARY: &[&str] = &[
    "python",
    "sql",
    "excel",
    "nlp",
    "machine learning",
    "deep learning",
    "power bi",
    "tableau",
    "data analysis",
    "c++",
    "java",
];

/// Finds which vocabulary terms appear anywhere in the document text.
///
/// Case-insensitive, not word-boundary-aware. Repeated mentions collapse to
/// one entry; the returned set is order-independent.
pub struct SkillsExtractor {
    vocabulary: Vec<String>,
}

impl SkillsExtractor {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary: vocabulary.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_SKILLS_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|skill| haystack.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}
