//! Session state: the conversation store and streaming events

pub mod entities;
pub mod stream;

pub use entities::{ChatSession, Conversation, Message, Role};
pub use stream::StreamEvent;
