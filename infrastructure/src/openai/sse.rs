//! Server-Sent Events parser for the streaming completions endpoint.
//!
//! The chat-completions stream is a sequence of `data:` events terminated by
//! the `data: [DONE]` sentinel. This parser converts an incrementally
//! arriving byte stream into complete events, handling multi-line `data:`
//! fields, comment lines, and CRLF line endings.

/// A parsed Server-Sent Event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The data payload. Multiple `data:` lines are joined with `\n`.
    pub data: String,
}

impl SseEvent {
    /// Whether this event is the `[DONE]` sentinel.
    pub fn is_done(&self) -> bool {
        self.data.trim() == "[DONE]"
    }
}

/// Internal state for building an SSE event from lines.
#[derive(Debug, Default)]
struct EventBuilder {
    data_lines: Vec<String>,
}

impl EventBuilder {
    fn has_data(&self) -> bool {
        !self.data_lines.is_empty()
    }

    fn build(&mut self) -> SseEvent {
        SseEvent {
            data: std::mem::take(&mut self.data_lines).join("\n"),
        }
    }

    /// Process a single line of SSE input.
    ///
    /// Returns `Some(SseEvent)` when an empty line (event boundary) is
    /// encountered and there is accumulated data.
    fn process_line(&mut self, line: &str) -> Option<SseEvent> {
        // Empty line = event boundary
        if line.is_empty() {
            if self.has_data() {
                return Some(self.build());
            }
            return None;
        }

        // Comment line
        if line.starts_with(':') {
            return None;
        }

        if let Some(value) = parse_data_field(line) {
            self.data_lines.push(value.to_string());
        }
        // Unknown fields (event:, id:, retry:) are ignored; the completions
        // endpoint only emits data lines.

        None
    }
}

/// Parse a `data:` line into its value, with the single leading space after
/// the colon stripped per the SSE spec.
fn parse_data_field(line: &str) -> Option<&str> {
    let value = line.strip_prefix("data:")?;
    Some(value.strip_prefix(' ').unwrap_or(value))
}

/// Incrementally parse SSE bytes, yielding events as they become complete.
///
/// Maintains internal line-buffer state across chunk boundaries: a delta
/// split mid-line by the transport still parses correctly.
#[derive(Debug, Default)]
pub struct SseLineParser {
    line_buffer: String,
    builder: EventBuilder,
}

impl SseLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a chunk of bytes into the parser.
    ///
    /// Returns any complete events that were parsed from this chunk.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        let text = String::from_utf8_lossy(chunk);
        let mut events = Vec::new();

        for ch in text.chars() {
            if ch == '\n' {
                let line = std::mem::take(&mut self.line_buffer);
                let line = line.strip_suffix('\r').unwrap_or(&line);
                if let Some(event) = self.builder.process_line(line) {
                    events.push(event);
                }
            } else {
                self.line_buffer.push(ch);
            }
        }

        events
    }

    /// Flush any remaining buffered data as a final event.
    ///
    /// Call this when the stream ends to emit an incomplete trailing event.
    pub fn flush(&mut self) -> Option<SseEvent> {
        if !self.line_buffer.is_empty() {
            let line = std::mem::take(&mut self.line_buffer);
            let line = line.strip_suffix('\r').unwrap_or(&line);
            self.builder.process_line(line);
        }

        if self.builder.has_data() {
            Some(self.builder.build())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_data_field_basic() {
        assert_eq!(parse_data_field("data: hello"), Some("hello"));
        assert_eq!(parse_data_field("data:hello"), Some("hello"));
        assert_eq!(parse_data_field("data:"), Some(""));
        assert_eq!(
            parse_data_field("data: {\"key\":\"value\"}"),
            Some("{\"key\":\"value\"}")
        );
        assert_eq!(parse_data_field("event: message"), None);
    }

    #[test]
    fn single_event_parses() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b"data: {\"text\":\"hi\"}\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "{\"text\":\"hi\"}");
    }

    #[test]
    fn event_split_across_chunks() {
        let mut parser = SseLineParser::new();
        assert!(parser.push(b"data: {\"tex").is_empty());
        assert!(parser.push(b"t\":\"hi\"}").is_empty());
        let events = parser.push(b"\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "{\"text\":\"hi\"}");
    }

    #[test]
    fn multiple_events_in_one_chunk() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b"data: one\n\ndata: two\n\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data, "one");
        assert_eq!(events[1].data, "two");
    }

    #[test]
    fn multi_line_data_joined_with_newline() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b"data: line1\ndata: line2\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "line1\nline2");
    }

    #[test]
    fn crlf_line_endings() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b"data: hello\r\n\r\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "hello");
    }

    #[test]
    fn comment_lines_ignored() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b": keep-alive\n\ndata: real\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "real");
    }

    #[test]
    fn done_sentinel_detected() {
        let mut parser = SseLineParser::new();
        let events = parser.push(b"data: [DONE]\n\n");
        assert_eq!(events.len(), 1);
        assert!(events[0].is_done());
    }

    #[test]
    fn flush_emits_trailing_event() {
        let mut parser = SseLineParser::new();
        assert!(parser.push(b"data: trailing").is_empty());
        let event = parser.flush().unwrap();
        assert_eq!(event.data, "trailing");
        assert!(parser.flush().is_none());
    }
}
