//! Caller-side quiz state.
//!
//! A quiz moves through
//! `AwaitingQuestion → QuestionServed(q) → AwaitingQuestion → ... → Finished`.
//! The session remembers which questions were served and hands that set to
//! the stateless selector on every draw.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TriviaError;
use crate::model::{CategoryFilter, Question, QuestionId};
use crate::quiz::{select_quiz_question, Selection};

/// Where a quiz currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Ready to serve the next question.
    AwaitingQuestion,
    /// A question was served and is waiting for an answer.
    QuestionServed(QuestionId),
    /// No more questions will be served.
    Finished,
}

/// Running tally of answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub answered: u32,
}

/// One player's pass through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: CategoryFilter,
    served: HashSet<QuestionId>,
    score: Score,
    max_rounds: Option<u32>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(category: CategoryFilter) -> Self {
        Self {
            category,
            served: HashSet::new(),
            score: Score::default(),
            max_rounds: None,
            state: QuizState::AwaitingQuestion,
        }
    }

    /// Stop after `rounds` questions have been served.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Ids of every question served so far.
    pub fn previous_questions(&self) -> &HashSet<QuestionId> {
        &self.served
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    /// Serve the next question from `pool`.
    ///
    /// Returns [`Selection::Exhausted`] and finishes the session once the
    /// pool runs dry or the round limit is reached. Asking again while a
    /// question is unanswered is a validation error.
    pub fn next_question<'a>(&mut self, pool: &'a [Question]) -> Result<Selection<'a>, TriviaError> {
        match self.state {
            QuizState::Finished => return Ok(Selection::Exhausted),
            QuizState::QuestionServed(id) => {
                return Err(TriviaError::validation(format!(
                    "question {id} has not been answered yet"
                )))
            }
            QuizState::AwaitingQuestion => {}
        }

        if self
            .max_rounds
            .is_some_and(|max| self.served.len() >= max as usize)
        {
            self.state = QuizState::Finished;
            return Ok(Selection::Exhausted);
        }

        let selection = select_quiz_question(pool, self.category, &self.served);
        self.state = match selection {
            Selection::Question(q) => {
                self.served.insert(q.id);
                QuizState::QuestionServed(q.id)
            }
            Selection::Exhausted => QuizState::Finished,
        };
        Ok(selection)
    }

    /// Record an answer to the question currently being served.
    ///
    /// Returns whether the answer was correct.
    pub fn submit_answer(&mut self, question: &Question, answer: &str) -> Result<bool, TriviaError> {
        match self.state {
            QuizState::QuestionServed(id) if id == question.id => {}
            QuizState::QuestionServed(id) => {
                return Err(TriviaError::validation(format!(
                    "answer is for question {} but question {id} was served",
                    question.id
                )))
            }
            _ => {
                return Err(TriviaError::validation(
                    "no question is waiting for an answer",
                ))
            }
        }

        let correct = answers_match(&question.answer, answer);
        self.score.answered += 1;
        if correct {
            self.score.correct += 1;
        }
        self.state = QuizState::AwaitingQuestion;
        Ok(correct)
    }
}

/// Compare answers ignoring case and surrounding whitespace.
pub fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}
