//! Error taxonomy for trivia operations.
//!
//! Running out of quiz questions is not represented here: it is a normal
//! outcome reported as [`crate::quiz::Selection::Exhausted`].

use thiserror::Error;

use crate::model::{CategoryId, QuestionId};

/// Errors surfaced by the core operations and the question store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    /// The requested page starts past the end of the collection.
    #[error("requested range not satisfiable: page starts at {start} but only {total} items exist")]
    OutOfRange { start: usize, total: usize },

    /// No question with this id exists.
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// No category with this id exists.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// The input was malformed or violated a constraint.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl TriviaError {
    /// Shorthand for building a [`TriviaError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        TriviaError::Validation(message.into())
    }

    /// Returns `true` if the error refers to an entity that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TriviaError::QuestionNotFound(_) | TriviaError::CategoryNotFound(_)
        )
    }
}
