//! Conversation-level types exchanged between clients and the relay.
//!
//! A conversation is an ordered sequence of [`ChatMessage`] values; ordering
//! is significant and preserved end to end. The relay itself holds no
//! history, so every [`ChatRequest`] carries the full conversation so far.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Author of a [`ChatMessage`].
///
/// Serialized in lowercase on the wire (`"system"`, `"user"`, `"assistant"`),
/// matching the completion provider's message format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Steering instructions; the relay prepends one such message per call.
    System,
    /// The end user asking questions.
    User,
    /// The completion provider's replies.
    Assistant,
}

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// One turn of a conversation.
///
/// # Examples
///
/// ```
/// use tutorlink_models::ChatMessage;
///
/// let msg = ChatMessage::user("什么是光合作用?");
/// assert_eq!(msg.role.to_string(), "user");
/// assert_eq!(msg.content, "什么是光合作用?");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Build a system message.
    pub fn system(content: &str) -> Self {
        Self {
            role: Role::System,
            content: content.to_string(),
        }
    }

    /// Build a user message.
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
        }
    }

    /// Build an assistant message.
    pub fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChatRequest
// ---------------------------------------------------------------------------

/// Body of `POST /api/chat`: the caller's conversation so far.
///
/// The sequence must be non-empty; the relay rejects empty conversations.
/// Caller-supplied system messages are not treated specially — the relay
/// always prepends its own steering directive in front of the sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Ordered conversation history, oldest message first.
    pub messages: Vec<ChatMessage>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::System.to_string(), "system");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(serde_json::from_str::<Role>("\"tool\"").is_err());
        assert!(serde_json::from_str::<Role>("\"User\"").is_err());
    }

    #[test]
    fn role_from_str() {
        use std::str::FromStr;
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("assistant").unwrap(), Role::Assistant);
        assert!(Role::from_str("wizard").is_err());
    }

    #[test]
    fn role_enum_iter() {
        use strum::IntoEnumIterator;
        let variants: Vec<_> = Role::iter().collect();
        assert_eq!(variants, vec![Role::System, Role::User, Role::Assistant]);
    }

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(ChatMessage::system("s").role, Role::System);
        assert_eq!(ChatMessage::user("u").role, Role::User);
        assert_eq!(ChatMessage::assistant("a").role, Role::Assistant);
    }

    #[test]
    fn message_wire_shape() {
        let json = serde_json::to_string(&ChatMessage::user("hello")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hello"}"#);
    }

    #[test]
    fn request_roundtrip_preserves_order() {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::user("什么是光合作用?"),
                ChatMessage::assistant("想一想，植物的叶子为什么是绿色的？"),
                ChatMessage::user("因为叶绿素?"),
            ],
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: ChatRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
        assert_eq!(back.messages[0].content, "什么是光合作用?");
        assert_eq!(back.messages[2].role, Role::User);
    }

    #[test]
    fn request_with_missing_content_is_rejected() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"messages":[{"role":"user"}]}"#);
        assert!(result.is_err());
    }
}
