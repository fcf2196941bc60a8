//! Shared error types for the services crate.

use thiserror::Error;

use edu_core::model::QuizId;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("quiz not found: {0:?}")]
    NotFound(QuizId),
    #[error("got {got} answers for a quiz with {expected} questions")]
    TooManyAnswers { expected: usize, got: usize },
}
