//! Wire types for the GLM completion provider.
//!
//! [`CompletionRequest`] is the body the relay POSTs to the provider.
//! [`CompletionResponse`] is the shape a conforming provider answers with;
//! the relay forwards successful provider bodies verbatim and only checks
//! that the first choice carries content, so the typed response here is
//! consumed by the SDK, the mock provider, and tests rather than by the
//! relay's forwarding path.

use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

// ---------------------------------------------------------------------------
// CompletionRequest
// ---------------------------------------------------------------------------

/// Body POSTed to the provider's completion endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier; the relay always sends its fixed model.
    pub model: String,
    /// Full message sequence, steering directive first.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.  A JSON number is a double, so `f64` keeps the
    /// in-memory value and the wire value identical.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

// ---------------------------------------------------------------------------
// CompletionResponse
// ---------------------------------------------------------------------------

/// Successful completion payload returned by the provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Generated alternatives; interactive calls get exactly one.
    pub choices: Vec<Choice>,
    /// Creation time as unix seconds.
    pub created: i64,
    /// Provider-assigned completion id.
    pub id: String,
    /// Model that produced the completion.
    pub model: String,
    /// Provider-assigned request id, distinct from the completion id.
    pub request_id: String,
    /// Token accounting for the call.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

/// One generated alternative within a [`CompletionResponse`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Choice {
    /// Position of this choice in the response.
    pub index: u32,
    /// The generated message (assistant role).
    pub message: ChatMessage,
    /// Why generation stopped (`"stop"`, `"length"`, …).
    pub finish_reason: String,
}

/// Token accounting reported by the provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated in the reply.
    pub completion_tokens: u32,
    /// Sum of prompt and completion tokens.
    pub total_tokens: u32,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
