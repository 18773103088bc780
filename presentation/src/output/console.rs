//! Console output formatter for chat messages

use colored::Colorize;
use tutor_domain::{FontSize, Message, Role};

/// Formats chat messages and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one message as a role-tagged bubble.
    ///
    /// The terminal analog of the pixel table {small→14, medium→18,
    /// large→22}: small renders dimmed, medium plain, large bold.
    pub fn format_message(message: &Message, font: FontSize) -> String {
        let label = Self::role_label(message.role);
        let content = match font {
            FontSize::Small => message.content.dimmed().to_string(),
            FontSize::Medium => message.content.clone(),
            FontSize::Large => message.content.bold().to_string(),
        };
        format!("{} {}", label, content)
    }

    /// Format the whole transcript, one bubble per stored message.
    pub fn format_transcript(messages: &[Message], font: FontSize) -> String {
        messages
            .iter()
            .map(|message| Self::format_message(message, font))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The informational notice shown when no API key was supplied.
    pub fn missing_key_notice() -> String {
        format!("{} OpenAI API 키를 입력해 주세요.", "🗝️".yellow())
    }

    /// A failed turn: the user message stays in history, resubmit to retry.
    pub fn turn_failed(error: &dyn std::fmt::Display) -> String {
        format!(
            "{} {} {}",
            "Error:".red().bold(),
            error,
            "(메시지를 다시 보내면 재시도합니다)".dimmed()
        )
    }

    /// The colored label printed before a message or a streaming response.
    pub fn role_label(role: Role) -> String {
        match role {
            Role::User => "you ▸".cyan().bold().to_string(),
            Role::Assistant => "coach ▸".green().bold().to_string(),
            Role::System => "system ▸".dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncolored() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_message_contains_content_and_label() {
        uncolored();
        let output =
            ConsoleFormatter::format_message(&Message::user("중력은 뭐예요?"), FontSize::Medium);
        assert!(output.contains("you"));
        assert!(output.contains("중력은 뭐예요?"));
    }

    #[test]
    fn test_transcript_renders_every_message() {
        uncolored();
        let messages = vec![Message::user("q"), Message::assistant("a")];
        let output = ConsoleFormatter::format_transcript(&messages, FontSize::Medium);
        assert!(output.contains("you"));
        assert!(output.contains("coach"));
    }

    #[test]
    fn test_missing_key_notice_text() {
        uncolored();
        assert!(ConsoleFormatter::missing_key_notice().contains("OpenAI API 키를 입력해 주세요."));
    }

    #[test]
    fn test_turn_failed_mentions_retry() {
        uncolored();
        let output = ConsoleFormatter::turn_failed(&"boom");
        assert!(output.contains("boom"));
        assert!(output.contains("다시"));
    }
}
