//! Completion client port
//!
//! Defines the interface for the external streaming completion API.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use tutor_domain::{GenerationParams, Message, Model, StreamEvent};

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum CompletionError {
    /// No API credential supplied. Checked before any call is attempted;
    /// callers gate on this and show a notice instead of invoking the client.
    #[error("No API credential supplied")]
    MissingCredential,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Any transport or API failure (network, rate limit, malformed
    /// response). Propagated to the caller, never retried internally.
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

/// A single completion request: resolved system message(s) followed by the
/// conversation history in chronological order, including the just-appended
/// user turn.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>, params: GenerationParams) -> Self {
        Self {
            model,
            messages,
            params,
        }
    }
}

/// Client for the streaming completion API
///
/// One request per user turn, single-shot: implementations must not retry.
/// The returned stream is finite and not restartable.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Start a streaming completion for the given request.
    async fn stream(&self, request: CompletionRequest) -> Result<StreamHandle, CompletionError>;
}

/// Handle for receiving streaming events from a completion call.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string.
    ///
    /// Useful when streaming happens at the transport level but only the
    /// final text is needed (quiet one-shot mode, tests).
    pub async fn collect_text(mut self) -> Result<String, CompletionError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(CompletionError::Upstream(e));
                }
            }
        }
        // Channel closed without Completed — return what we have
        Ok(full_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collect_text_joins_deltas() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(StreamEvent::Delta("hello ".to_string())).await.unwrap();
        tx.send(StreamEvent::Delta("world".to_string())).await.unwrap();
        tx.send(StreamEvent::Completed("hello world".to_string()))
            .await
            .unwrap();
        drop(tx);

        let text = StreamHandle::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn collect_text_falls_back_to_completed_payload() {
        let (tx, rx) = mpsc::channel(1);
        tx.send(StreamEvent::Completed("full".to_string())).await.unwrap();
        drop(tx);

        let text = StreamHandle::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "full");
    }

    #[tokio::test]
    async fn collect_text_surfaces_stream_error() {
        let (tx, rx) = mpsc::channel(2);
        tx.send(StreamEvent::Delta("partial".to_string())).await.unwrap();
        tx.send(StreamEvent::Error("connection reset".to_string()))
            .await
            .unwrap();
        drop(tx);

        let result = StreamHandle::new(rx).collect_text().await;
        assert!(matches!(result, Err(CompletionError::Upstream(_))));
    }
}
