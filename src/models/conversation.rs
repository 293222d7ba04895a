use serde::{Deserialize, Serialize};

use super::enums::MessageRole;
use crate::config::MAX_HISTORY_MESSAGES;

/// One chat turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }

    /// An assistant message that answered from search results, i.e. one
    /// that carries none of the "no relevant content" sentinels.
    pub fn is_sermon_bearing<S: AsRef<str>>(&self, sentinels: &[S]) -> bool {
        self.is_assistant()
            && !sentinels
                .iter()
                .map(AsRef::as_ref)
                .filter(|s| !s.is_empty())
                .any(|s| self.content.contains(s))
    }
}

/// Ordered chat history, oldest first.
///
/// Owned by the calling session and threaded through every call by value
/// or reference. Nothing in the classifier mutates it; `appended` returns a
/// new history instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// A copy of this history with `message` at the end, keeping at most
    /// `MAX_HISTORY_MESSAGES` (oldest dropped first).
    pub fn appended(&self, message: Message) -> Self {
        let keep_from = (self.messages.len() + 1).saturating_sub(MAX_HISTORY_MESSAGES);
        let mut messages: Vec<Message> = self.messages[keep_from.min(self.messages.len())..].to_vec();
        messages.push(message);
        Self { messages }
    }

    /// Assistant messages, most recent first.
    pub fn assistant_messages_newest_first(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().rev().filter(|m| m.is_assistant())
    }

    /// The most recent assistant message that actually answered from sermon content.
    pub fn last_sermon_bearing_answer<S: AsRef<str>>(&self, sentinels: &[S]) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.is_sermon_bearing(sentinels))
    }
}

impl From<Vec<Message>> for ConversationHistory {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for ConversationHistory {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
