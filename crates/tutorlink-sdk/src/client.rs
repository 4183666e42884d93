//! HTTP client for the Tutorlink relay.
//!
//! [`RelayClient`] posts full conversations to the relay's chat endpoint
//! and parses either the typed completion or the relay's uniform
//! `{error, details?}` failure shape.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use tutorlink_sdk::{Conversation, RelayClient};
//!
//! # async fn run() -> Result<(), tutorlink_sdk::SdkError> {
//! let client = RelayClient::new("http://localhost:3002");
//! let mut conversation = Conversation::new();
//!
//! let reply = client.send_turn(&mut conversation, "二次方程怎么解?").await?;
//! println!("{}", reply.content);
//! # Ok(())
//! # }
//! ```

use tutorlink_models::{ChatMessage, ChatRequest, CompletionResponse, ErrorResponse};

use crate::conversation::Conversation;
use crate::error::SdkError;

/// A client bound to one relay instance.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    chat_url: String,
}

impl RelayClient {
    /// Create a client for a relay at `base_url` (e.g. `http://localhost:3002`).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    /// The chat endpoint this client posts to.
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    // ------------------------------------------------------------------
    // Sending
    // ------------------------------------------------------------------

    /// POST a full conversation to the relay and parse the completion.
    ///
    /// The relay prepends its own steering directive; callers only supply
    /// the visible history.
    pub async fn send(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, SdkError> {
        let res = self
            .http
            .post(&self.chat_url)
            .json(&ChatRequest {
                messages: messages.to_vec(),
            })
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(relay_error(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|_| SdkError::MalformedReply)
    }

    /// Send the user's next message within `conversation`.
    ///
    /// The message is recorded optimistically before the call and rolled
    /// back again if any error comes back, leaving the history exactly as
    /// it was before the turn.  On success the assistant reply is appended
    /// and returned.
    pub async fn send_turn(
        &self,
        conversation: &mut Conversation,
        content: &str,
    ) -> Result<ChatMessage, SdkError> {
        let history = conversation.begin_turn(content);
        match self.send(history).await.and_then(first_reply) {
            Ok(reply) => {
                conversation.complete_turn(reply.clone());
                Ok(reply)
            }
            Err(e) => {
                conversation.roll_back_turn();
                Err(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reply and error-shape parsing
// ---------------------------------------------------------------------------

/// Extract the assistant message from the first choice of a completion.
fn first_reply(response: CompletionResponse) -> Result<ChatMessage, SdkError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or(SdkError::MalformedReply)
}

/// Interpret a non-2xx relay body as the uniform `{error, details?}` shape.
///
/// Falls back to the raw text when the body is something else entirely
/// (e.g. a proxy in front of the relay answered instead).
fn relay_error(status: u16, body: &str) -> SdkError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => SdkError::Relay {
            status,
            message: err.error,
            details: err.details,
        },
        Err(_) => SdkError::Relay {
            status,
            message: body.trim().to_string(),
            details: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
