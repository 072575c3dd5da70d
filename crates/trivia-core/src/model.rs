//! Core data model types for trivia.
//!
//! Questions and categories are owned by a [`crate::traits::QuestionStore`];
//! the pure operations in this crate only ever see read-only snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TriviaError;

/// Identifier of a question.
pub type QuestionId = u32;

/// Identifier of a category. `0` is reserved as the "any category" sentinel.
pub type CategoryId = u32;

/// Lowest accepted difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted difficulty.
pub const MAX_DIFFICULTY: u8 = 5;

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: QuestionId,
    /// The question text.
    #[serde(rename = "question")]
    pub text: String,
    /// The expected answer.
    pub answer: String,
    /// Category this question belongs to.
    pub category: CategoryId,
    /// Difficulty from 1 (easy) to 5 (hard).
    pub difficulty: u8,
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Human-readable label (e.g. "Science").
    #[serde(rename = "type")]
    pub label: String,
}

/// Payload for creating a question. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(deserialize_with = "number_or_string")]
    pub category: CategoryId,
    #[serde(deserialize_with = "number_or_string")]
    pub difficulty: u8,
}

impl NewQuestion {
    /// Check the payload for constraints that do not need the store.
    ///
    /// Whether `category` refers to an existing category is checked by the
    /// store on insert.
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.text.trim().is_empty() {
            return Err(TriviaError::validation("question text is empty"));
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::validation("answer is empty"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(TriviaError::validation(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {}",
                self.difficulty
            )));
        }
        if self.category == 0 {
            return Err(TriviaError::validation("category is required"));
        }
        Ok(())
    }

    /// Attach an id, producing the stored question.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text.trim().to_string(),
            answer: self.answer.trim().to_string(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Which categories a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    Any,
    /// Only questions of this category.
    Category(CategoryId),
}

impl CategoryFilter {
    /// Returns `true` if a question of `category` passes this filter.
    pub fn matches(&self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Category(id) => *id == category,
        }
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        if id == 0 {
            CategoryFilter::Any
        } else {
            CategoryFilter::Category(id)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Any => write!(f, "any"),
            CategoryFilter::Category(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" => Ok(CategoryFilter::Any),
            other => other
                .parse::<CategoryId>()
                .map(CategoryFilter::from)
                .map_err(|_| format!("unknown category filter: {other}")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

/// Deserialize a number that may arrive as a JSON number or a numeric string.
///
/// Browser forms post `"1"` where the API means `1`.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question() -> NewQuestion {
        NewQuestion {
            text: "What is the heaviest organ in the human body?".into(),
            answer: "The Liver".into(),
            category: 1,
            difficulty: 4,
        }
    }

    #[test]
    fn question_uses_wire_field_names() {
        let q = Question {
            id: 20,
            text: "What is the heaviest organ in the human body?".into(),
            answer: "The Liver".into(),
            category: 1,
            difficulty: 4,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["question"], "What is the heaviest organ in the human body?");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn category_label_serializes_as_type() {
        let c = Category {
            id: 1,
            label: "Science".into(),
        };
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["type"], "Science");
    }

    #[test]
    fn new_question_accepts_numeric_strings() {
        let json = r#"{"question":"Is it working?","answer":"Yes","difficulty":"1","category":"1"}"#;
        let q: NewQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.category, 1);
        assert_eq!(q.difficulty, 1);
    }

    #[test]
    fn new_question_rejects_non_numeric_strings() {
        let json = r#"{"question":"Q","answer":"A","difficulty":"hard","category":1}"#;
        assert!(serde_json::from_str::<NewQuestion>(json).is_err());
    }

    #[test]
    fn validate_accepts_well_formed_payload() {
        assert!(new_question().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_fields_and_bad_difficulty() {
        let mut q = new_question();
        q.text = "   ".into();
        assert!(matches!(q.validate(), Err(TriviaError::Validation(_))));

        let mut q = new_question();
        q.answer = String::new();
        assert!(q.validate().is_err());

        let mut q = new_question();
        q.difficulty = 6;
        assert!(q.validate().is_err());

        let mut q = new_question();
        q.category = 0;
        assert!(q.validate().is_err());
    }

    #[test]
    fn category_filter_zero_means_any() {
        assert_eq!(CategoryFilter::from(0), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from(6), CategoryFilter::Category(6));
        assert!(CategoryFilter::Any.matches(3));
        assert!(CategoryFilter::Category(6).matches(6));
        assert!(!CategoryFilter::Category(6).matches(5));
    }

    #[test]
    fn category_filter_display_and_parse() {
        assert_eq!(CategoryFilter::Any.to_string(), "any");
        assert_eq!(CategoryFilter::Category(4).to_string(), "4");
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::Any);
        assert_eq!("0".parse::<CategoryFilter>().unwrap(), CategoryFilter::Any);
        assert_eq!(
            "4".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category(4)
        );
        assert!("science".parse::<CategoryFilter>().is_err());
    }
}
