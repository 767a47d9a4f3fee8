use shared_types::{EntityLabel, EntityRecognizer};

/// Geography tokens that disqualify a name candidate.
///
/// Short address lines ("Chennai, Tamil Nadu") satisfy the same 2-4 word
/// shape as a name and are the most common false positive.
pub const GEOGRAPHY_TOKENS: &[&str] = &["tamil", "nadu", "india", "chennai"];

/// How many leading lines the heading heuristic inspects.
const HEADING_LINES: usize = 5;

/// Best-effort extraction of the candidate's full name.
///
/// Stage 1 scans the first few lines for a short heading-shaped line, since
/// resumes conventionally open with the candidate's name. Stage 2 falls back
/// to named-entity recognition over the full text for resumes that open with
/// a job title, logo text, or similar. Stage order is authoritative: a
/// qualifying heading line always wins over a recognized entity.
pub struct NameExtractor {
    denylist: Vec<String>,
}

impl NameExtractor {
    pub fn new(denylist: Vec<String>) -> Self {
        Self {
            denylist: denylist.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GEOGRAPHY_TOKENS.iter().map(|t| t.to_string()).collect())
    }

    pub fn extract(&self, text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
        // Stage 1: heading heuristic over the first lines.
        for line in text.lines().take(HEADING_LINES) {
            let line = line.trim();
            let words = line.split_whitespace().count();
            if (2..=4).contains(&words) && !self.is_denied(line) {
                return Some(line.to_string());
            }
        }

        // Stage 2: entity-recognition fallback.
        recognizer
            .find_entities(text)
            .into_iter()
            .find(|e| e.label == EntityLabel::Person && !self.is_denied(&e.text))
            .map(|e| e.text)
    }

    fn is_denied(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        self.denylist.iter().any(|token| candidate.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::NamedEntity;

    /// Recognizer stub returning a fixed entity list.
    struct FixedRecognizer(Vec<NamedEntity>);

    impl EntityRecognizer for FixedRecognizer {
        fn find_entities(&self, _text: &str) -> Vec<NamedEntity> {
            self.0.clone()
        }
    }

    fn person(name: &str) -> NamedEntity {
        NamedEntity {
            text: name.to_string(),
            label: EntityLabel::Person,
        }
    }

    #[test]
    fn test_heading_line_wins() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![person("Someone Else")]);
        let text = "Arun Kumar\nData Analyst with 5 years of experience in analytics\n";
        assert_eq!(
            extractor.extract(text, &recognizer),
            Some("Arun Kumar".to_string())
        );
    }

    #[test]
    fn test_denylisted_address_line_is_skipped_for_later_heading() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![person("Fallback Person")]);
        // First line is an address; the second qualifying line must win over
        // the recognizer fallback.
        let text = "Chennai, Tamil Nadu\nArun Kumar\n";
        assert_eq!(
            extractor.extract(text, &recognizer),
            Some("Arun Kumar".to_string())
        );
    }

    #[test]
    fn test_recognizer_fallback_when_no_heading_qualifies() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![person("Arun Kumar")]);
        let text = "CURRICULUM VITAE OF A SENIOR PROFESSIONAL CANDIDATE PROFILE\n\n";
        assert_eq!(
            extractor.extract(text, &recognizer),
            Some("Arun Kumar".to_string())
        );
    }

    #[test]
    fn test_fallback_respects_denylist() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![person("Chennai Office"), person("Arun Kumar")]);
        let text = "RESUME DOCUMENT FOR A SENIOR ANALYTICS LEADERSHIP ROLE TODAY\n";
        assert_eq!(
            extractor.extract(text, &recognizer),
            Some("Arun Kumar".to_string())
        );
    }

    #[test]
    fn test_lines_beyond_the_first_five_are_ignored() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![]);
        let text = "\n\n\n\n\nArun Kumar\n";
        assert_eq!(extractor.extract(text, &recognizer), None);
    }

    #[test]
    fn test_no_candidate_anywhere() {
        let extractor = NameExtractor::with_defaults();
        let recognizer = FixedRecognizer(vec![]);
        assert_eq!(extractor.extract("", &recognizer), None);
    }
}
