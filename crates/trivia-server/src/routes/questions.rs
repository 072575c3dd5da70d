//! `/questions` handlers: paged listing, creation, deletion, search.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use trivia_core::categories::aggregate_categories;
use trivia_core::paginate::paginate;
use trivia_core::search::search_questions;
use trivia_core::{CategoryId, NewQuestion, Question, QuestionId};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::routes::PageParams;
use crate::state::AppState;

/// One page of the full question list.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
}

/// One page of search results.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
    #[serde(default)]
    pub page: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub id: QuestionId,
}

/// `GET /questions?page=N`
#[instrument(skip_all)]
pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Envelope<QuestionPage>, ApiError> {
    let Query(params) = params?;

    let categories = state.store.categories().await?;
    let questions = state.store.list_all().await?;
    let page = paginate(&questions, params.page(), state.questions_per_page)?;

    Ok(Envelope::ok(QuestionPage {
        questions: page.to_vec(),
        total_questions: questions.len(),
        categories: aggregate_categories(&categories),
    }))
}

/// `POST /questions`
#[instrument(skip_all)]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Envelope<Question>, ApiError> {
    let Json(payload) = payload?;

    let created = state.store.insert(payload).await?;
    info!(id = created.id, category = created.category, "question created");

    Ok(Envelope::created(created))
}

/// `DELETE /questions/{id}`
#[instrument(skip_all)]
pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<QuestionId>, PathRejection>,
) -> Result<Envelope<Deleted>, ApiError> {
    let Path(id) = id?;

    let removed = state.store.delete(id).await?;
    info!(id = removed.id, "question deleted");

    Ok(Envelope::ok(Deleted { id: removed.id }))
}

/// `POST /questions/search`
#[instrument(skip_all)]
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Envelope<SearchResults>, ApiError> {
    let Json(request) = payload?;

    let questions = state.store.list_all().await?;
    let matches: Vec<Question> = search_questions(&questions, &request.search_term)
        .into_iter()
        .cloned()
        .collect();
    let page = paginate(&matches, request.page.unwrap_or(1), state.questions_per_page)?;

    Ok(Envelope::ok(SearchResults {
        questions: page.to_vec(),
        total_questions: matches.len(),
    }))
}
