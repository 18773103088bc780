//! Session configuration entity
//!
//! [`ChatConfig`] groups everything the settings panel collects. Any field
//! may change between turns; a change takes effect on the next turn only,
//! because the turn pipeline reads the config fresh at each submission.

use crate::config::presets::{CoachMode, FontSize, Grade};
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Bounds for the temperature slider
pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 1.5);
/// Bounds for the max-tokens slider
pub const MAX_TOKENS_RANGE: (u32, u32) = (50, 4000);

/// Generation parameters forwarded to the completion API.
///
/// Values are clamped to the slider ranges at construction, so no invalid
/// value can reach the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationParams {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature: temperature.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1),
            max_tokens: max_tokens.clamp(MAX_TOKENS_RANGE.0, MAX_TOKENS_RANGE.1),
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 512,
        }
    }
}

/// Everything the settings panel collects, for the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: Model,
    pub mode: CoachMode,
    pub grade: Grade,
    /// User-edited system prompt. `None` means "use the generated template".
    pub system_prompt_override: Option<String>,
    pub generation: GenerationParams,
    /// Append the fixed safety note in emotion-coach mode
    pub safe_mode: bool,
    pub font: FontSize,
    /// Cap on the number of most-recent completed turns sent upstream.
    /// `None` sends the full history every turn.
    pub history_limit: Option<usize>,
}

impl Default for ChatConfig {
    /// Defaults matching the original settings panel: gpt-3.5-turbo,
    /// concept coach, 3학년, temperature 0.7, 512 tokens, safe mode on,
    /// medium font, unbounded history.
    fn default() -> Self {
        Self {
            model: Model::default(),
            mode: CoachMode::default(),
            grade: Grade::default(),
            system_prompt_override: None,
            generation: GenerationParams::default(),
            safe_mode: true,
            font: FontSize::default(),
            history_limit: None,
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_mode(mut self, mode: CoachMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt_override = Some(prompt.into());
        self
    }

    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_safe_mode(mut self, safe_mode: bool) -> Self {
        self.safe_mode = safe_mode;
        self
    }

    pub fn with_font(mut self, font: FontSize) -> Self {
        self.font = font;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// The "reset system prompt" action: back to the generated template.
    ///
    /// Clears to `None` rather than to the placeholder text, so the
    /// post-reset state is indistinguishable from session start.
    pub fn reset_system_prompt(&mut self) {
        self.system_prompt_override = None;
    }
}
