//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They hold plain strings where selectors are concerned and convert into
//! the domain [`ChatConfig`] with strict parsing and clamping. The API
//! credential deliberately has no place here: it is entered per session and
//! never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutor_domain::{ChatConfig, DomainError, GenerationParams};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Model identifier (gpt-4o-mini, gpt-4, gpt-3.5-turbo)
    pub model: Option<String>,
    /// Persona mode (concept, emotion)
    pub mode: Option<String>,
    /// Grade level (1-6 or 1학년-6학년)
    pub grade: Option<String>,
    /// Append the safety note in emotion mode
    pub safe_mode: bool,
    /// System prompt override; blank means "use the generated template"
    pub system_prompt: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            model: None,
            mode: None,
            grade: None,
            safe_mode: true,
            system_prompt: None,
        }
    }
}

/// Raw generation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Sampling temperature, clamped to [0.0, 1.5]
    pub temperature: f32,
    /// Response token budget, clamped to [50, 4000]
    pub max_tokens: u32,
    /// Cap on completed turns sent upstream; absent = full history
    pub history_limit: Option<usize>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            history_limit: None,
        }
    }
}

/// Raw UI configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Chat message font size (small, medium, large)
    pub font: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            font: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the streaming spinner
    pub show_progress: bool,
    /// Path to the readline history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete raw configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub chat: FileChatConfig,
    pub generation: FileGenerationConfig,
    pub ui: FileUiConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Convert into the domain config, rejecting unknown selector strings
    /// and clamping slider values.
    pub fn into_chat_config(self) -> Result<ChatConfig, ConfigValidationError> {
        let mut config = ChatConfig::new();

        if let Some(model) = &self.chat.model {
            config.model = model.parse()?;
        }
        if let Some(mode) = &self.chat.mode {
            config.mode = mode.parse()?;
        }
        if let Some(grade) = &self.chat.grade {
            config.grade = grade.parse()?;
        }
        config.safe_mode = self.chat.safe_mode;
        config.system_prompt_override = self
            .chat
            .system_prompt
            .filter(|prompt| !prompt.trim().is_empty());

        config.generation =
            GenerationParams::new(self.generation.temperature, self.generation.max_tokens);
        config.history_limit = self.generation.history_limit;

        if let Some(font) = &self.ui.font {
            config.font = font.parse()?;
        }

        Ok(config)
    }
}
