//! Prompt templates for the coaching personas

use crate::config::Grade;

/// The literal initial value of the editable system-prompt field.
///
/// Treated as "unset" for template-selection purposes: a user who never
/// touched the field gets the generated persona template.
pub const PLACEHOLDER_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Fixed supplementary system message for emotion-coach mode with safe mode
/// enabled. Always sent as its own system-role entry.
pub const SAFETY_NOTE: &str = "Note for students: I am a helpful guide but not a professional. \
     If this is an emergency or you feel at risk, please contact a trusted adult \
     or emergency services immediately.";

/// Templates for generating the persona system prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the concept coach ("개념 유지 코치")
    pub fn concept_coach(grade: Grade) -> String {
        format!(
            "You are an elementary school 'Concept Keeper' tutor for {}. \
             When a student asks about any school concept, explain clearly using short sentences, \
             simple words appropriate for the selected grade, step-by-step examples, and quick checks \
             (1-2 simple questions) to confirm understanding. If the student shows a misconception, \
             gently correct it and provide a short practice exercise. \
             Be encouraging and positive. Keep replies concise and use age-appropriate analogies.",
            grade.as_str()
        )
    }

    /// System prompt for the emotion coach ("감정 코치")
    pub fn emotion_coach(grade: Grade) -> String {
        format!(
            "You are an elementary-friendly emotional coach for {}. \
             When a student shares feelings or problems (friendship, study, health), respond with empathy, \
             validate feelings, offer simple coping steps and actionable suggestions \
             (talk to teacher/parent, breathe, small steps). \
             Avoid professional medical or legal advice. If the student mentions harm to self or others \
             or an emergency, clearly instruct them to seek immediate help from a trusted adult \
             or emergency services.",
            grade.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_template_mentions_comprehension_checks() {
        let prompt = PromptTemplate::concept_coach(Grade::Third);
        assert!(prompt.contains("3학년"));
        assert!(prompt.contains("step-by-step"));
        assert!(prompt.contains("quick checks"));
    }

    #[test]
    fn test_emotion_template_mentions_escalation() {
        let prompt = PromptTemplate::emotion_coach(Grade::First);
        assert!(prompt.contains("1학년"));
        assert!(prompt.contains("trusted adult"));
        assert!(prompt.contains("emergency services"));
    }

    #[test]
    fn test_safety_note_is_distinct_from_templates() {
        assert!(!PromptTemplate::emotion_coach(Grade::Third).contains(SAFETY_NOTE));
        assert!(SAFETY_NOTE.contains("not a professional"));
    }
}
