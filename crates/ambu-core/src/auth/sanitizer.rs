//! Username sanitization.
//!
//! Strips tag-like substrings so that markup never reaches a field the UI may
//! echo back. The server remains the only authority on credential validity.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `<...>` as well as an unterminated trailing `<...`.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is a valid regex"));

pub fn sanitize_username(raw: &str) -> String {
    TAG_PATTERN.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(sanitize_username("<b>john</b>"), "john");
        assert_eq!(sanitize_username("<script>alert(1)</script>mario"), "alert(1)mario");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(sanitize_username("dott.rossi"), "dott.rossi");
        assert_eq!(sanitize_username("a > b"), "a > b");
        assert_eq!(sanitize_username(""), "");
    }

    #[test]
    fn test_unterminated_tag_is_dropped() {
        assert_eq!(sanitize_username("anna<img src=x"), "anna");
    }
}
