//! `/categories` handlers.

use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use trivia_core::categories::aggregate_categories;
use trivia_core::paginate::paginate;
use trivia_core::{CategoryId, Question};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::routes::PageParams;
use crate::state::AppState;

/// One page of the questions in a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// `GET /categories`
#[instrument(skip_all)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Envelope<BTreeMap<CategoryId, String>>, ApiError> {
    let categories = state.store.categories().await?;
    Ok(Envelope::ok(aggregate_categories(&categories)))
}

/// `GET /categories/{id}/questions?page=N`
#[instrument(skip_all)]
pub async fn questions_by_category(
    State(state): State<AppState>,
    id: Result<Path<CategoryId>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Envelope<CategoryQuestions>, ApiError> {
    let Path(id) = id?;
    let Query(params) = params?;

    let category = state.store.category(id).await?;
    let questions = state.store.list_by_category(id).await?;
    let page = paginate(&questions, params.page(), state.questions_per_page)?;

    Ok(Envelope::ok(CategoryQuestions {
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category: category.label,
    }))
}
