//! Application layer for tutor-chat
//!
//! This crate contains the turn pipeline use case and the port definitions
//! it depends on. It depends only on the domain layer; adapters live in the
//! infrastructure crate.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_client::{CompletionClient, CompletionError, CompletionRequest, StreamHandle},
    turn_progress::{NoTurnProgress, TurnProgress},
};
pub use use_cases::run_turn::{RunTurnUseCase, TurnError};
