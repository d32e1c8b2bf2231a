//! DTOs for the short-code lookup endpoint.

use serde::Deserialize;

/// JSON body of a `200 OK` lookup.
///
/// Only `url` is read. The backend also sends `originalUrl` and `createdAt`,
/// which are ignored.
#[derive(Debug, Deserialize)]
pub struct LookupBody {
    pub url: Option<String>,
}

impl LookupBody {
    /// Parses a response body and returns its non-blank destination, if any.
    pub fn destination_from(body: &str) -> Option<String> {
        let parsed: LookupBody = serde_json::from_str(body).ok()?;
        parsed.url.filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_from_full_body() {
        let body = r#"{"url":"https://example.com/y","originalUrl":"https://example.com/y","createdAt":"2024-01-01T00:00:00Z"}"#;
        assert_eq!(
            LookupBody::destination_from(body),
            Some("https://example.com/y".to_string())
        );
    }

    #[test]
    fn test_destination_missing() {
        assert_eq!(LookupBody::destination_from(""), None);
        assert_eq!(LookupBody::destination_from("null"), None);
        assert_eq!(LookupBody::destination_from("{}"), None);
        assert_eq!(LookupBody::destination_from(r#"{"url":""}"#), None);
        assert_eq!(LookupBody::destination_from(r#"{"url":42}"#), None);
        assert_eq!(
            LookupBody::destination_from(r#"{"originalUrl":"https://x.test"}"#),
            None
        );
    }
}
