//! OpenAI completion client implementation

use crate::openai::request::{build_chat_request, extract_delta, extract_error_message};
use crate::openai::sse::SseLineParser;
use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use tutor_application::{CompletionClient, CompletionError, CompletionRequest, StreamHandle};
use tutor_domain::StreamEvent;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Completion client for the OpenAI chat-completions API.
///
/// Holds the per-session credential; construction fails when no key was
/// supplied, so a client instance implies the credential check has passed.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key deliberately omitted
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiClient {
    /// Create a client with the session credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CompletionError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a compatible endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn map_http_error(status: reqwest::StatusCode, body: &str) -> CompletionError {
        let message = extract_error_message(body);
        match status.as_u16() {
            401 => CompletionError::Authentication(message),
            code => CompletionError::Upstream(format!("HTTP {}: {}", code, message)),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn stream(&self, request: CompletionRequest) -> Result<StreamHandle, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = build_chat_request(&request);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Upstream(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::map_http_error(status, &body_text));
        }

        // Bridge the SSE byte stream into the StreamEvent channel. The
        // reader task ends when the stream does or the receiver is dropped.
        let (tx, rx) = mpsc::channel(32);
        let mut byte_stream = response.bytes_stream();

        tokio::spawn(async move {
            let mut parser = SseLineParser::new();
            let mut full_text = String::new();

            while let Some(chunk) = byte_stream.next().await {
                let bytes = match chunk {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!("Stream read error: {}", e);
                        let _ = tx
                            .send(StreamEvent::Error(format!("stream read error: {}", e)))
                            .await;
                        return;
                    }
                };

                for event in parser.push(&bytes) {
                    if event.is_done() {
                        let _ = tx.send(StreamEvent::Completed(full_text)).await;
                        return;
                    }
                    if let Some(delta) = extract_delta(&event.data) {
                        full_text.push_str(&delta);
                        if tx.send(StreamEvent::Delta(delta)).await.is_err() {
                            return;
                        }
                    }
                }
            }

            // Stream ended without [DONE] — flush and complete with what we have
            if let Some(event) = parser.flush() {
                if !event.is_done() {
                    if let Some(delta) = extract_delta(&event.data) {
                        full_text.push_str(&delta);
                        let _ = tx.send(StreamEvent::Delta(delta)).await;
                    }
                }
            }
            let _ = tx.send(StreamEvent::Completed(full_text)).await;
        });

        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_missing_credential() {
        assert!(matches!(
            OpenAiClient::new(""),
            Err(CompletionError::MissingCredential)
        ));
        assert!(matches!(
            OpenAiClient::new("   "),
            Err(CompletionError::MissingCredential)
        ));
    }

    #[test]
    fn test_client_construction_with_key() {
        let client = OpenAiClient::new("sk-test").unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);

        let client = client.with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_http_error_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided"}}"#;
        let err = OpenAiClient::map_http_error(reqwest::StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, CompletionError::Authentication(_)));

        let err = OpenAiClient::map_http_error(reqwest::StatusCode::TOO_MANY_REQUESTS, "busy");
        match err {
            CompletionError::Upstream(message) => assert!(message.contains("429")),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_omits_api_key() {
        let client = OpenAiClient::new("sk-secret").unwrap();
        let output = format!("{:?}", client);
        assert!(!output.contains("sk-secret"));
    }
}
