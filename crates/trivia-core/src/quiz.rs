//! Random quiz-question selection.
//!
//! The selector keeps no history: the caller owns the set of questions
//! already served and passes it in on every draw.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::{CategoryFilter, Question, QuestionId};

/// Outcome of drawing a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// An eligible question was drawn.
    Question(&'a Question),
    /// No eligible question remains. This ends a quiz normally.
    Exhausted,
}

impl<'a> Selection<'a> {
    /// The drawn question, if any.
    pub fn question(self) -> Option<&'a Question> {
        match self {
            Selection::Question(q) => Some(q),
            Selection::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Selection::Exhausted)
    }
}

/// Questions in `pool` that match `category` and are not in `excluded`,
/// in pool order.
pub fn eligible_questions<'a>(
    pool: &'a [Question],
    category: CategoryFilter,
    excluded: &HashSet<QuestionId>,
) -> Vec<&'a Question> {
    pool.iter()
        .filter(|q| category.matches(q.category))
        .filter(|q| !excluded.contains(&q.id))
        .collect()
}

/// Draw one eligible question uniformly at random using the thread RNG.
pub fn select_quiz_question<'a>(
    pool: &'a [Question],
    category: CategoryFilter,
    excluded: &HashSet<QuestionId>,
) -> Selection<'a> {
    select_quiz_question_with(&mut rand::rng(), pool, category, excluded)
}

/// Draw one eligible question uniformly at random using `rng`.
pub fn select_quiz_question_with<'a, R>(
    rng: &mut R,
    pool: &'a [Question],
    category: CategoryFilter,
    excluded: &HashSet<QuestionId>,
) -> Selection<'a>
where
    R: Rng + ?Sized,
{
    eligible_questions(pool, category, excluded)
        .choose(rng)
        .copied()
        .map_or(Selection::Exhausted, Selection::Question)
}
