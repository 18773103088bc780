//! Port definitions (interfaces implemented by infrastructure/presentation)

pub mod completion_client;
pub mod turn_progress;
