use regex::Regex;

/// Extracts the first standalone 10-digit run bounded by word boundaries.
///
/// No country-code handling and no separator tolerance: hyphens, spaces, or
/// parentheses inside the number break the match.
pub struct PhoneExtractor {
    pattern: Regex,
}

impl PhoneExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\b\d{10}\b").unwrap(),
        }
    }

    pub fn extract(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}
