//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK.  It wraps transport and serialization errors and
//! carries the relay's own error shape as a structured variant.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// HTTP request failure (transport level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The relay answered with its uniform error shape.
    #[error("relay error ({status}): {message}")]
    Relay {
        /// HTTP status the relay answered with.
        status: u16,
        /// The relay's `error` field.
        message: String,
        /// The relay's `details` field, when present.
        details: Option<String>,
    },

    /// The relay claimed success but the body is not a usable completion.
    #[error("malformed completion reply")]
    MalformedReply,
}
