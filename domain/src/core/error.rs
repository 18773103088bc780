//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid model: {0} (supported: gpt-4o-mini, gpt-4, gpt-3.5-turbo)")]
    InvalidModel(String),

    #[error("Invalid mode: {0} (supported: concept, emotion)")]
    InvalidMode(String),

    #[error("Invalid grade: {0} (supported: 1-6 or 1학년-6학년)")]
    InvalidGrade(String),

    #[error("Invalid font size: {0} (supported: small, medium, large)")]
    InvalidFontSize(String),
}
