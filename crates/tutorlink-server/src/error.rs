//! Error types for the chat relay.
//!
//! [`RelayError`] unifies all failure modes and implements
//! [`axum::response::IntoResponse`] so handlers can return
//! `Result<…, RelayError>` directly; every variant maps to the uniform
//! `{error, details?}` body on the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tutorlink_models::ErrorResponse;

// ---------------------------------------------------------------------------
// TokenError
// ---------------------------------------------------------------------------

/// Errors from bearer-token construction.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The credential did not split into a non-empty id and secret.
    #[error("malformed provider credential: expected \"<id>.<secret>\"")]
    MalformedCredential,

    /// Claim encoding or HMAC computation failed.
    #[error("token signing failed: {0}")]
    SigningFailure(String),
}

impl From<serde_json::Error> for TokenError {
    fn from(e: serde_json::Error) -> Self {
        Self::SigningFailure(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// RelayError
// ---------------------------------------------------------------------------

/// Errors that can occur while relaying one conversation.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The request body is not a non-empty message sequence.
    #[error("invalid request: {0}")]
    InvalidPayload(String),

    /// The provider credential is missing or unusable for signing.
    #[error("server configuration error: {0}")]
    Config(String),

    /// The HTTP call to the provider failed at the transport level.
    #[error("failed to reach completion provider: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("completion provider returned status {status}")]
    UpstreamError {
        /// HTTP status the provider answered with.
        status: u16,
        /// Raw provider body, passed back verbatim in `details`.
        body: String,
    },

    /// The provider claimed success but the body is not parseable JSON.
    #[error("completion provider returned a non-JSON body")]
    MalformedUpstreamResponse {
        /// Raw provider body, passed back in `details` for diagnosis.
        body: String,
    },

    /// The parsed provider body has no content in its first choice.
    #[error("completion provider response is missing message content")]
    UnexpectedResponseShape,
}

impl From<TokenError> for RelayError {
    fn from(e: TokenError) -> Self {
        Self::Config(e.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            // Re-serve the provider's own status; fall back to 502 when it
            // does not round-trip through StatusCode.
            Self::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::MalformedUpstreamResponse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnexpectedResponseShape => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let details = match self {
            Self::UpstreamError { body, .. } | Self::MalformedUpstreamResponse { body } => {
                Some(body)
            }
            _ => None,
        };

        tracing::error!(%status, error = %message, "relay request failed");
        (status, Json(ErrorResponse { error: message, details })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
