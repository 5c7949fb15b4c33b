//! Result classification.
//!
//! The service encodes its verdict as sentinel strings inside `phone_number`.
//! This is the only place those strings are interpreted; everything
//! downstream works with [`SearchResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{SearchResult, SourceDetail};

pub const OFF_TOPIC_SENTINEL: &str = "Off-Topic";
pub const NOT_FOUND_SENTINEL: &str = "Not Found";

/// Raw `/search` response body.
///
/// `phone_number` is kept as a loose JSON value so that a missing or
/// non-string field can be classified instead of failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub phone_number: Option<Value>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub details: Option<Vec<SourceDetail>>,
}

/// Maps a payload to exactly one result variant. First match wins.
pub fn classify(payload: SearchPayload) -> SearchResult {
    let phone = match payload.phone_number {
        Some(Value::String(phone)) => phone,
        _ => return SearchResult::NotFound,
    };

    if phone == OFF_TOPIC_SENTINEL {
        return SearchResult::OffTopic;
    }
    if phone == NOT_FOUND_SENTINEL || phone.trim().is_empty() {
        return SearchResult::NotFound;
    }

    SearchResult::Found {
        query_echo: payload.query.unwrap_or_default(),
        phone_number: phone,
        primary_source: payload.source.unwrap_or_default(),
        details: payload.details.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> SearchPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_off_topic_ignores_other_fields() {
        let payload = parse(json!({
            "query": "pizza margherita",
            "phone_number": "Off-Topic",
            "source": "Validation",
            "details": [{"url": "https://x", "phone": "123", "method": "Regex"}]
        }));
        assert_eq!(classify(payload), SearchResult::OffTopic);
    }

    #[test]
    fn test_not_found_sentinel() {
        let payload = parse(json!({"phone_number": "Not Found"}));
        assert_eq!(classify(payload), SearchResult::NotFound);
    }

    #[test]
    fn test_found_with_empty_details() {
        let payload = parse(json!({
            "query": "Studio Bianchi",
            "phone_number": "+39 02 1234567",
            "source": "Google",
            "details": []
        }));

        assert_eq!(
            classify(payload),
            SearchResult::Found {
                query_echo: "Studio Bianchi".to_string(),
                phone_number: "+39 02 1234567".to_string(),
                primary_source: "Google".to_string(),
                details: Vec::new(),
            }
        );
    }

    #[test]
    fn test_found_keeps_details_in_order() {
        let payload = parse(json!({
            "query": "q",
            "phone_number": "123",
            "source": "Deep Search (2/3 ricerche simili)",
            "details": [
                {"url": "https://a", "phone": "123", "method": "Regex"},
                {"url": "https://b", "phone": "456", "method": "Regex"},
                {"url": "https://c", "phone": "123", "method": "Regex"}
            ]
        }));

        let result = classify(payload);
        let urls: Vec<&str> = result.details().iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a", "https://b", "https://c"]);
    }

    #[test]
    fn test_absent_details_become_empty() {
        let payload = parse(json!({"phone_number": "0612345", "source": "OpenAI WebSearch"}));
        let result = classify(payload);
        assert!(result.is_found());
        assert!(result.details().is_empty());
    }

    #[test]
    fn test_missing_or_malformed_phone_is_not_found() {
        assert_eq!(classify(parse(json!({}))), SearchResult::NotFound);
        assert_eq!(classify(parse(json!({"phone_number": null}))), SearchResult::NotFound);
        assert_eq!(classify(parse(json!({"phone_number": 39021234}))), SearchResult::NotFound);
        assert_eq!(classify(parse(json!({"phone_number": "  "}))), SearchResult::NotFound);
    }

    #[test]
    fn test_sentinels_are_exact_matches() {
        let lower = classify(parse(json!({"phone_number": "off-topic"})));
        assert!(lower.is_found());

        let padded = classify(parse(json!({"phone_number": "Not Found!"})));
        assert!(padded.is_found());
    }

    #[test]
    fn test_null_detail_fields_do_not_reject_the_payload() {
        let payload = parse(json!({
            "query": "Studio Verdi",
            "phone_number": "02 555",
            "source": "Google",
            "details": [
                {"url": "https://a.example", "phone": "02 555", "method": "Regex"},
                {"url": null, "phone": null, "method": "AI"}
            ]
        }));

        let result = classify(payload);
        assert_eq!(result.phone_number(), Some("02 555"));
        assert_eq!(result.details().len(), 2);
        assert_eq!(result.details()[1].phone, "");
    }
}
