use regex::Regex;

/// Extracts the first email-like token from resume text.
///
/// Human-readable obfuscations (`john(at)example(dot)com`) are normalized
/// before matching. The bare tokens `" at "` / `" dot "` are only substituted
/// on a retry when the first pass finds nothing, since they also occur in
/// ordinary prose right before an address ("reach me at ...").
pub struct EmailExtractor {
    pattern: Regex,
    at_obfuscation: Regex,
    dot_obfuscation: Regex,
    strip_whitespace: bool,
}

impl EmailExtractor {
    pub fn new(strip_whitespace: bool) -> Self {
        Self {
            pattern: Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").unwrap(),
            at_obfuscation: Regex::new(r"(?i)[(\[]at[)\]]").unwrap(),
            dot_obfuscation: Regex::new(r"(?i)[(\[]dot[)\]]").unwrap(),
            strip_whitespace,
        }
    }

    /// First syntactically valid email in document order, or `None`.
    pub fn extract(&self, text: &str) -> Option<String> {
        let normalized = self.normalize_brackets(text);

        if let Some(email) = self.find_match(&normalized) {
            return Some(email);
        }

        // Fallback: treat free-standing " at " / " dot " as obfuscation.
        let retried = normalized.replace(" at ", "@").replace(" dot ", ".");
        self.find_match(&retried)
    }

    fn normalize_brackets(&self, text: &str) -> String {
        let text = self.at_obfuscation.replace_all(text, "@");
        self.dot_obfuscation.replace_all(&text, ".").into_owned()
    }

    fn find_match(&self, text: &str) -> Option<String> {
        let haystack: String = if self.strip_whitespace {
            text.split_whitespace().collect()
        } else {
            text.to_string()
        };

        self.pattern
            .find(&haystack)
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_email() {
        let extractor = EmailExtractor::new(false);
        let text = "Contact: jane_doe+cv@mail-server.co.in\nPhone: none";
        assert_eq!(
            extractor.extract(text),
            Some("jane_doe+cv@mail-server.co.in".to_string())
        );
    }

    #[test]
    fn test_obfuscated_email_round_trips() {
        let extractor = EmailExtractor::new(false);
        assert_eq!(
            extractor.extract("Reach me at john(dot)doe(at)example(dot)com"),
            Some("john.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_bracket_obfuscation() {
        let extractor = EmailExtractor::new(false);
        assert_eq!(
            extractor.extract("john[at]example[dot]com"),
            Some("john@example.com".to_string())
        );
    }

    #[test]
    fn test_bare_token_obfuscation_used_as_fallback() {
        let extractor = EmailExtractor::new(false);
        assert_eq!(
            extractor.extract("contact john at example dot com"),
            Some("john@example.com".to_string())
        );
    }

    #[test]
    fn test_bare_tokens_left_alone_when_first_pass_matches() {
        let extractor = EmailExtractor::new(false);
        // "me at" must not be folded into the address once a real match exists.
        let text = "write to me at john.doe@example.com today";
        assert_eq!(
            extractor.extract(text),
            Some("john.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_no_contact_info() {
        let extractor = EmailExtractor::new(false);
        assert_eq!(extractor.extract("no contact info here"), None);
    }

    #[test]
    fn test_first_of_multiple_emails_wins() {
        let extractor = EmailExtractor::new(false);
        let text = "primary@example.com and also backup@example.org";
        assert_eq!(
            extractor.extract(text),
            Some("primary@example.com".to_string())
        );
    }

    #[test]
    fn test_whitespace_stripping_joins_wrapped_address() {
        let extractor = EmailExtractor::new(true);
        let text = "john.doe@\nexample.com";
        assert_eq!(
            extractor.extract(text),
            Some("john.doe@example.com".to_string())
        );
    }

    #[test]
    fn test_empty_text() {
        let extractor = EmailExtractor::new(false);
        assert_eq!(extractor.extract(""), None);
    }
}
