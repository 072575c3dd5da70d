use std::sync::Arc;

use trivia_core::QuestionStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub questions_per_page: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, questions_per_page: usize) -> Self {
        Self {
            store,
            questions_per_page,
        }
    }
}
