//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while setting up a `QuizEngine`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    EmptyBank,
}
