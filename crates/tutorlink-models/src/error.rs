//! The uniform error payload the relay returns for every failed request.

use serde::{Deserialize, Serialize};

/// Error body returned by the relay for any failure, whatever the status.
///
/// `details` carries raw diagnostic context when one exists (for instance
/// the provider's unmodified response body); the field is omitted from the
/// JSON entirely when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
    /// Raw diagnostic payload, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_key_omitted_when_absent() {
        let err = ErrorResponse {
            error: "invalid request".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"invalid request"}"#);
    }

    #[test]
    fn roundtrip_with_details() {
        let err = ErrorResponse {
            error: "completion provider returned status 503".to_string(),
            details: Some(r#"{"error":{"code":"1113"}}"#.to_string()),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn parses_body_without_details() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(err.error, "boom");
        assert_eq!(err.details, None);
    }
}
