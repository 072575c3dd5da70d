//! In-memory question store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::TriviaError;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::parser::QuestionBank;

use crate::traits::QuestionStore;

#[derive(Debug)]
struct Inner {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

/// A [`QuestionStore`] backed by ordered maps behind a read-write lock.
///
/// Readers get cloned snapshots; writers are serialized by the lock.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl MemoryStore {
    /// Build a store from categories and questions.
    ///
    /// Later duplicates replace earlier ones. New questions get ids after
    /// the largest existing id.
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let categories: BTreeMap<_, _> = categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<_, _> = questions.into_iter().map(|q| (q.id, q)).collect();
        let next_id = questions.keys().next_back().map_or(1, |max| max.saturating_add(1));

        Self {
            inner: RwLock::new(Inner {
                categories,
                questions,
                next_id,
            }),
        }
    }

    /// Build a store seeded from a parsed question bank.
    pub fn from_bank(bank: QuestionBank) -> Self {
        Self::new(bank.categories, bank.questions)
    }

    /// Number of stored questions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.questions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.questions.is_empty()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, TriviaError> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<Category, TriviaError> {
        self.inner
            .read()
            .await
            .categories
            .get(&id)
            .cloned()
            .ok_or(TriviaError::CategoryNotFound(id))
    }

    async fn list_all(&self) -> Result<Vec<Question>, TriviaError> {
        Ok(self.inner.read().await.questions.values().cloned().collect())
    }

    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, TriviaError> {
        let inner = self.inner.read().await;
        if !inner.categories.contains_key(&id) {
            return Err(TriviaError::CategoryNotFound(id));
        }
        Ok(inner
            .questions
            .values()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: QuestionId) -> Result<Question, TriviaError> {
        self.inner
            .read()
            .await
            .questions
            .get(&id)
            .cloned()
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    async fn delete(&self, id: QuestionId) -> Result<Question, TriviaError> {
        let removed = self
            .inner
            .write()
            .await
            .questions
            .remove(&id)
            .ok_or(TriviaError::QuestionNotFound(id))?;
        debug!(id, "deleted question");
        Ok(removed)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, TriviaError> {
        question.validate()?;

        let mut inner = self.inner.write().await;
        if !inner.categories.contains_key(&question.category) {
            return Err(TriviaError::validation(format!(
                "unknown category: {}",
                question.category
            )));
        }

        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| TriviaError::validation("question ids exhausted"))?;

        let stored = question.into_question(id);
        inner.questions.insert(id, stored.clone());
        debug!(id, category = stored.category, "inserted question");
        Ok(stored)
    }
}
