//! Request body construction and streaming-chunk parsing for the
//! chat-completions endpoint.

use tutor_application::CompletionRequest;
use tutor_domain::Message;

/// Build the JSON request body for a streaming chat completion.
pub fn build_chat_request(request: &CompletionRequest) -> serde_json::Value {
    serde_json::json!({
        "model": request.model.as_str(),
        "messages": messages_to_json(&request.messages),
        "temperature": request.params.temperature,
        "max_tokens": request.params.max_tokens,
        "stream": true,
    })
}

fn messages_to_json(messages: &[Message]) -> Vec<serde_json::Value> {
    messages
        .iter()
        .map(|message| {
            serde_json::json!({
                "role": message.role.as_str(),
                "content": message.content,
            })
        })
        .collect()
}

/// Extract the text fragment from one streaming chunk payload.
///
/// Chunks look like
/// `{"choices":[{"delta":{"content":"..."},"finish_reason":null}]}`.
/// Returns `None` for chunks without content (role-only first delta, the
/// final finish chunk, unparseable payloads).
pub fn extract_delta(data: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(data).ok()?;
    let content = parsed
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()?;

    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Extract a human-readable message from an error response body.
///
/// Error bodies look like `{"error":{"message":"...","type":"..."}}`; falls
/// back to the raw body when that shape is absent.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_domain::{GenerationParams, Model};

    fn request() -> CompletionRequest {
        CompletionRequest::new(
            Model::Gpt35Turbo,
            vec![
                Message::system("You are a tutor."),
                Message::user("중력은 뭐예요?"),
            ],
            GenerationParams::new(0.7, 512),
        )
    }

    #[test]
    fn test_request_body_shape() {
        let body = build_chat_request(&request());

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["stream"], true);
        assert_eq!(body["max_tokens"], 512);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "You are a tutor.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "중력은 뭐예요?");
    }

    #[test]
    fn test_extract_delta_content() {
        let data = r#"{"choices":[{"delta":{"content":"안녕"},"finish_reason":null}]}"#;
        assert_eq!(extract_delta(data), Some("안녕".to_string()));
    }

    #[test]
    fn test_extract_delta_skips_role_only_chunk() {
        let data = r#"{"choices":[{"delta":{"role":"assistant"},"finish_reason":null}]}"#;
        assert_eq!(extract_delta(data), None);
    }

    #[test]
    fn test_extract_delta_skips_finish_chunk() {
        let data = r#"{"choices":[{"delta":{},"finish_reason":"stop"}]}"#;
        assert_eq!(extract_delta(data), None);
    }

    #[test]
    fn test_extract_delta_tolerates_garbage() {
        assert_eq!(extract_delta("not json"), None);
        assert_eq!(extract_delta("{}"), None);
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(extract_error_message(body), "Incorrect API key provided");
        assert_eq!(extract_error_message("plain text"), "plain text");
    }
}
