//! Session configuration: selector presets and generation parameters

pub mod chat_config;
pub mod presets;

pub use chat_config::{ChatConfig, GenerationParams};
pub use presets::{CoachMode, FontSize, Grade};
