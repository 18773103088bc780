//! Domain layer for tutor-chat
//!
//! This crate contains the core entities and pure logic: the configuration
//! value objects, the conversation store, and the prompt composer. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Coach Modes
//!
//! The chatbot runs one of two persona presets for elementary-school use:
//!
//! - **Concept coach** ("개념 유지 코치"): explains school concepts at the
//!   selected grade level, with comprehension checks and gentle correction
//! - **Emotion coach** ("감정 코치"): responds empathetically to feelings
//!   and problems, optionally backed by a fixed safety note
//!
//! ## Session
//!
//! All mutable state (config + conversation) lives in an explicit
//! [`ChatSession`] object owned by the caller for the lifetime of the
//! process. Nothing is persisted across sessions.

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ChatConfig, CoachMode, FontSize, GenerationParams, Grade};
pub use core::{error::DomainError, model::Model};
pub use prompt::{
    PLACEHOLDER_SYSTEM_PROMPT, PromptTemplate, SAFETY_NOTE, resolve_system_messages,
    sample_questions,
};
pub use session::{
    entities::{ChatSession, Conversation, Message, Role},
    stream::StreamEvent,
};
