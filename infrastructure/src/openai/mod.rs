//! OpenAI chat-completions adapter
//!
//! Implements the [`CompletionClient`](tutor_application::CompletionClient)
//! port over the `/v1/chat/completions` endpoint with `stream: true`.

pub mod client;
pub mod request;
pub mod sse;

pub use client::OpenAiClient;
