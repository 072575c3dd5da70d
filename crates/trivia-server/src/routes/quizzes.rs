//! `/quizzes` handler: serve the next random question of a quiz.

use std::collections::HashSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use trivia_core::model::number_or_string;
use trivia_core::{select_quiz_question, CategoryFilter, CategoryId, Question, QuestionId};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    /// Missing means any category.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// The category object the front end sends; only `id` matters.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "number_or_string")]
    pub id: CategoryId,
}

impl QuizRequest {
    pub fn filter(&self) -> CategoryFilter {
        self.quiz_category
            .as_ref()
            .map_or(CategoryFilter::Any, |c| CategoryFilter::from(c.id))
    }
}

/// `{question}` while questions remain, `{}` once the quiz is exhausted.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// `POST /quizzes`
#[instrument(skip_all)]
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Envelope<QuizResponse>, ApiError> {
    let Json(request) = payload?;

    let filter = request.filter();
    let excluded: HashSet<QuestionId> = request.previous_questions.iter().copied().collect();
    let pool = state.store.list_all().await?;

    let question = select_quiz_question(&pool, filter, &excluded)
        .question()
        .cloned();
    debug!(
        category = %filter,
        previous = excluded.len(),
        exhausted = question.is_none(),
        "quiz draw"
    );

    Ok(Envelope::ok(QuizResponse { question }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_category_id_is_accepted() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"type": "Science", "id": "1"}}"#,
        )
        .unwrap();
        assert_eq!(req.filter(), CategoryFilter::Category(1));
    }

    #[test]
    fn zero_or_missing_category_means_any() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 2], "quiz_category": {"type": "click", "id": 0}}"#,
        )
        .unwrap();
        assert_eq!(req.filter(), CategoryFilter::Any);

        let req: QuizRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.filter(), CategoryFilter::Any);
        assert!(req.previous_questions.is_empty());
    }

    #[test]
    fn exhausted_response_is_empty_object() {
        let value = serde_json::to_value(QuizResponse { question: None }).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
