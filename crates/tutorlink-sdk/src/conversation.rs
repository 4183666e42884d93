//! Client-held conversation history.
//!
//! The relay is stateless, so the full history is resent on every turn and
//! the client owns the record of what was said.  A turn is recorded
//! optimistically: [`Conversation::begin_turn`] appends the user message
//! before the network call, and [`Conversation::roll_back_turn`] removes it
//! again when the call fails, leaving the history exactly as it was.

use tutorlink_models::{ChatMessage, Role};

/// Ordered conversation history, oldest message first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Start with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conversation so far.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record the user's next message and return the history to send.
    pub fn begin_turn(&mut self, content: &str) -> &[ChatMessage] {
        self.messages.push(ChatMessage::user(content));
        &self.messages
    }

    /// Record the assistant's reply, completing the turn.
    pub fn complete_turn(&mut self, reply: ChatMessage) {
        self.messages.push(reply);
    }

    /// Remove the optimistically recorded user message after a failed turn.
    ///
    /// A no-op unless the most recent message is a user message, so calling
    /// it twice cannot eat an earlier exchange.
    pub fn roll_back_turn(&mut self) {
        if self
            .messages
            .last()
            .is_some_and(|m| m.role == Role::User)
        {
            self.messages.pop();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_turn_appends_and_exposes_history() {
        let mut conversation = Conversation::new();
        let history = conversation.begin_turn("什么是光合作用?");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], ChatMessage::user("什么是光合作用?"));
    }

    #[test]
    fn completed_turn_keeps_both_sides() {
        let mut conversation = Conversation::new();
        conversation.begin_turn("什么是光合作用?");
        conversation.complete_turn(ChatMessage::assistant("先想想叶子的颜色。"));

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn failed_turn_rolls_back_to_the_previous_state() {
        let mut conversation = Conversation::new();
        conversation.begin_turn("第一问");
        conversation.complete_turn(ChatMessage::assistant("第一答"));
        let before = conversation.clone();

        conversation.begin_turn("第二问");
        conversation.roll_back_turn();

        assert_eq!(conversation, before);
    }

    #[test]
    fn roll_back_never_eats_an_assistant_reply() {
        let mut conversation = Conversation::new();
        conversation.begin_turn("问");
        conversation.complete_turn(ChatMessage::assistant("答"));

        conversation.roll_back_turn();
        conversation.roll_back_turn();

        assert_eq!(conversation.len(), 2);
    }

    #[test]
    fn roll_back_on_empty_history_is_a_no_op() {
        let mut conversation = Conversation::new();
        conversation.roll_back_turn();
        assert!(conversation.is_empty());
    }
}
