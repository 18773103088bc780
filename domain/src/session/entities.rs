//! Session domain entities

use crate::config::ChatConfig;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A message in a conversation (Entity)
///
/// Immutable once appended; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The conversation store (Entity)
///
/// An ordered, append-only-per-turn sequence of messages. Created empty at
/// session start, cleared only by an explicit reset, never persisted.
/// System messages are not stored here; they are resolved per turn by the
/// prompt composer.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. The only mutator besides [`reset`](Self::reset).
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.append(Message::user(content));
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.append(Message::assistant(content));
    }

    /// Read-only view of the full history, chronological order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Clear to empty. Used by explicit user action only, never automatic.
    pub fn reset(&mut self) {
        self.messages.clear();
    }
}

/// The session context object owning all mutable per-session state.
///
/// One of these exists per process; the turn pipeline borrows it rather
/// than reading ambient globals.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    config: ChatConfig,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            conversation: Conversation::new(),
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChatConfig {
        &mut self.config
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_chronological_order() {
        let mut conversation = Conversation::new();
        conversation.add_user_message("중력은 뭐예요?");
        conversation.add_assistant_message("중력은 지구가 물체를 당기는 힘이에요.");
        conversation.add_user_message("달에도 중력이 있어요?");
        conversation.add_assistant_message("네, 지구보다 약하지만 있어요.");

        let all = conversation.all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].role, Role::User);
        assert_eq!(all[1].role, Role::Assistant);
        assert_eq!(all[2].role, Role::User);
        assert_eq!(all[3].role, Role::Assistant);
    }

    #[test]
    fn test_n_turns_alternate_starting_with_user() {
        let mut conversation = Conversation::new();
        let n = 5;
        for i in 0..n {
            conversation.add_user_message(format!("question {}", i));
            conversation.add_assistant_message(format!("answer {}", i));
        }

        assert_eq!(conversation.len(), 2 * n);
        for (i, message) in conversation.all().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role, expected);
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut conversation = Conversation::new();
        conversation.add_user_message("hello");
        conversation.reset();
        assert!(conversation.is_empty());
        conversation.reset();
        assert!(conversation.is_empty());
    }

    #[test]
    fn test_session_starts_empty() {
        let session = ChatSession::new(ChatConfig::new());
        assert!(session.conversation().is_empty());
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::system("a").role, Role::System);
        assert_eq!(Message::user("b").role, Role::User);
        assert_eq!(Message::assistant("c").role, Role::Assistant);
    }
}
