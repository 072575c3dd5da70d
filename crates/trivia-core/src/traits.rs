//! Core trait definitions for question storage.
//!
//! The server and CLI talk to questions only through [`QuestionStore`];
//! [`crate::store::MemoryStore`] is the bundled implementation.

use async_trait::async_trait;

use crate::error::TriviaError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Source of question snapshots and sink for question mutations.
///
/// Every listing returns an owned snapshot ordered by id, so callers can
/// paginate or draw from it without holding any lock.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, TriviaError>;

    /// Look up one category.
    async fn category(&self, id: CategoryId) -> Result<Category, TriviaError>;

    /// All questions, ordered by id.
    async fn list_all(&self) -> Result<Vec<Question>, TriviaError>;

    /// Questions of one category, ordered by id.
    ///
    /// Fails with [`TriviaError::CategoryNotFound`] for an unknown category.
    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, TriviaError>;

    /// Look up one question.
    async fn get(&self, id: QuestionId) -> Result<Question, TriviaError>;

    /// Remove a question, returning it.
    async fn delete(&self, id: QuestionId) -> Result<Question, TriviaError>;

    /// Validate and store a new question, returning it with its id.
    async fn insert(&self, question: NewQuestion) -> Result<Question, TriviaError>;
}
