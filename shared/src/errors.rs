//! Error types for the GymMania domain model

use thiserror::Error;

/// Domain-level error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid mood rating: {0} (expected 1-5)")]
    InvalidMood(u8),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    #[error("Invalid meal type: {0}")]
    InvalidMealType(String),

    #[error("Invalid diet goal: {0}")]
    InvalidGoal(String),
}

impl From<crate::validation::ValidationError> for DomainError {
    fn from(err: crate::validation::ValidationError) -> Self {
        DomainError::Validation(err.user_message())
    }
}
