//! Prompt composition: templates, safety note, and system-message resolution

pub mod template;

pub use template::{PromptTemplate, PLACEHOLDER_SYSTEM_PROMPT, SAFETY_NOTE};

use crate::config::{ChatConfig, CoachMode};
use crate::session::entities::Message;

/// Resolve the system message(s) for the next turn.
///
/// Returns an ordered list of at most 2 system-role messages:
///
/// 1. The user's override verbatim if one is set, otherwise the template
///    generated for the current mode and grade. An override that is `None`,
///    blank, or equal to the placeholder default counts as unset.
/// 2. The fixed safety note, appended only in emotion-coach mode with safe
///    mode enabled — always a separate entry, never merged into the first.
pub fn resolve_system_messages(config: &ChatConfig) -> Vec<Message> {
    let override_text = config
        .system_prompt_override
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty() && *text != PLACEHOLDER_SYSTEM_PROMPT);

    let first = match override_text {
        Some(_) => {
            // Verbatim, untrimmed: the trimming above only decides whether
            // the override counts as set.
            config.system_prompt_override.clone().unwrap_or_default()
        }
        None => match config.mode {
            CoachMode::ConceptCoach => PromptTemplate::concept_coach(config.grade),
            CoachMode::EmotionCoach => PromptTemplate::emotion_coach(config.grade),
        },
    };

    let mut messages = vec![Message::system(first)];

    if config.mode == CoachMode::EmotionCoach && config.safe_mode {
        messages.push(Message::system(SAFETY_NOTE));
    }

    messages
}

/// Sample questions shown as one-click shortcuts, 3 per mode.
///
/// Sending one behaves identically to typing the text and submitting.
pub fn sample_questions(mode: CoachMode) -> [&'static str; 3] {
    match mode {
        CoachMode::ConceptCoach => [
            "중력은 뭐예요?",
            "분수는 어떻게 더해요?",
            "태양계에는 어떤 행성들이 있어요?",
        ],
        CoachMode::EmotionCoach => [
            "친구가 저를 무시해요. 어떻게 해야 하나요?",
            "시험 공부가 너무 어려워요. 팁이 있을까요?",
            "잠이 잘 안 와요. 어떻게 하면 좋을까요?",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Grade;
    use crate::session::entities::Role;

    #[test]
    fn test_unset_override_selects_concept_template_with_grade() {
        let config = ChatConfig::new().with_grade(Grade::Third);
        let messages = resolve_system_messages(&config);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("3학년"));
        assert_eq!(messages[0].content, PromptTemplate::concept_coach(Grade::Third));
    }

    #[test]
    fn test_placeholder_override_counts_as_unset() {
        let config = ChatConfig::new().with_system_prompt(PLACEHOLDER_SYSTEM_PROMPT);
        let messages = resolve_system_messages(&config);
        assert_eq!(messages[0].content, PromptTemplate::concept_coach(Grade::Third));
    }

    #[test]
    fn test_blank_override_counts_as_unset() {
        let config = ChatConfig::new().with_system_prompt("   ");
        let messages = resolve_system_messages(&config);
        assert_eq!(messages[0].content, PromptTemplate::concept_coach(Grade::Third));
    }

    #[test]
    fn test_set_override_used_verbatim_as_sole_message() {
        let config = ChatConfig::new().with_system_prompt("You are a pirate.");
        let messages = resolve_system_messages(&config);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "You are a pirate.");
    }

    #[test]
    fn test_emotion_mode_with_safe_mode_appends_safety_note() {
        let config = ChatConfig::new().with_mode(CoachMode::EmotionCoach);
        let messages = resolve_system_messages(&config);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, PromptTemplate::emotion_coach(Grade::Third));
        assert_eq!(messages[1].role, Role::System);
        assert_eq!(messages[1].content, SAFETY_NOTE);
    }

    #[test]
    fn test_safety_note_follows_override_too() {
        let config = ChatConfig::new()
            .with_mode(CoachMode::EmotionCoach)
            .with_system_prompt("custom persona");
        let messages = resolve_system_messages(&config);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "custom persona");
        assert_eq!(messages[1].content, SAFETY_NOTE);
    }

    #[test]
    fn test_emotion_mode_without_safe_mode_is_single_message() {
        let config = ChatConfig::new()
            .with_mode(CoachMode::EmotionCoach)
            .with_safe_mode(false);
        assert_eq!(resolve_system_messages(&config).len(), 1);
    }

    #[test]
    fn test_concept_mode_is_single_message_regardless_of_safe_mode() {
        for safe_mode in [true, false] {
            let config = ChatConfig::new().with_safe_mode(safe_mode);
            assert_eq!(resolve_system_messages(&config).len(), 1);
        }
    }

    #[test]
    fn test_every_grade_appears_verbatim_in_both_templates() {
        for grade in Grade::all() {
            assert!(PromptTemplate::concept_coach(grade).contains(grade.as_str()));
            assert!(PromptTemplate::emotion_coach(grade).contains(grade.as_str()));
        }
    }

    #[test]
    fn test_sample_questions_three_per_mode() {
        assert_eq!(sample_questions(CoachMode::ConceptCoach).len(), 3);
        assert_eq!(sample_questions(CoachMode::EmotionCoach).len(), 3);
        assert!(sample_questions(CoachMode::ConceptCoach).contains(&"중력은 뭐예요?"));
        assert!(
            sample_questions(CoachMode::EmotionCoach)
                .contains(&"잠이 잘 안 와요. 어떻게 하면 좋을까요?")
        );
    }
}
