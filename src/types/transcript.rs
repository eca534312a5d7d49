//! Conversation transcript
//!
//! Ordered, append-only history of a session. The only removal allowed is
//! rolling back the user message of a turn that failed.

use super::messages::{ChatMessage, Role};

/// Ordered user/assistant history owned by the conversation loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message for a new turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append the completed assistant reply
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Drop the trailing user message after a failed turn
    ///
    /// Returns the removed message. An empty transcript, or one whose last
    /// entry is an assistant reply, is left untouched.
    pub fn rollback_user(&mut self) -> Option<ChatMessage> {
        match self.messages.last() {
            Some(last) if last.role == Role::User => self.messages.pop(),
            _ => None,
        }
    }

    /// Messages in turn order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
