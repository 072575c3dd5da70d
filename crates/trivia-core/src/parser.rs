//! TOML question bank parser.
//!
//! Loads question banks from TOML files and validates them.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Category, CategoryId, Question, QuestionId, MAX_DIFFICULTY, MIN_DIFFICULTY};

/// A named set of categories and questions used to seed a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Human-readable name.
    pub name: String,
    /// Description of this bank.
    #[serde(default)]
    pub description: String,
    /// Categories, in file order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Questions, in file order, each with an id.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    categories: Vec<TomlCategory>,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    id: CategoryId,
    #[serde(rename = "type")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    #[serde(default)]
    id: Option<QuestionId>,
    question: String,
    answer: String,
    category: CategoryId,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
}

fn default_difficulty() -> u8 {
    1
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
///
/// Questions without an explicit id are numbered after the largest
/// explicit id, in file order.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut next_id = parsed
        .questions
        .iter()
        .filter_map(|q| q.id)
        .max()
        .unwrap_or(0);

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let id = match q.id {
                Some(id) => id,
                None => {
                    next_id = next_id
                        .checked_add(1)
                        .context("ran out of question ids")?;
                    next_id
                }
            };
            Ok(Question {
                id,
                text: q.question,
                answer: q.answer,
                category: q.category,
                difficulty: q.difficulty,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let categories = parsed
        .categories
        .into_iter()
        .map(|c| Category {
            id: c.id,
            label: c.label,
        })
        .collect();

    Ok(QuestionBank {
        name: parsed.bank.name,
        description: parsed.bank.description,
        categories,
        questions,
    })
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<QuestionId>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_categories = HashSet::new();
    for category in &bank.categories {
        if !seen_categories.insert(category.id) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("duplicate category ID: {}", category.id),
            });
        }
        if category.id == 0 {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("category '{}' uses reserved ID 0", category.label),
            });
        }
    }

    let mut seen_ids = HashSet::new();
    let mut per_category: HashMap<CategoryId, usize> = HashMap::new();
    for q in &bank.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("duplicate question ID: {}", q.id),
            });
        }

        if !seen_categories.contains(&q.category) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("unknown category: {}", q.category),
            });
        }
        *per_category.entry(q.category).or_default() += 1;

        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "question text is empty".into(),
            });
        }

        if q.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "answer is empty".into(),
            });
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&q.difficulty) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!(
                    "difficulty {} is outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}",
                    q.difficulty
                ),
            });
        }
    }

    for category in &bank.categories {
        if !per_category.contains_key(&category.id) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("category '{}' has no questions", category.label),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
name = "Test Bank"
description = "A small bank"

[[categories]]
id = 1
type = "Science"

[[categories]]
id = 6
type = "Sports"

[[questions]]
id = 20
question = "What is the heaviest organ in the human body?"
answer = "The Liver"
category = 1
difficulty = 4

[[questions]]
id = 10
question = "Which is the only team to play in every soccer World Cup tournament?"
answer = "Brazil"
category = 6
difficulty = 3
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.name, "Test Bank");
        assert_eq!(bank.categories.len(), 2);
        assert_eq!(bank.categories[1].label, "Sports");
        assert_eq!(bank.questions.len(), 2);
        assert_eq!(bank.questions[0].id, 20);
        assert_eq!(bank.questions[1].answer, "Brazil");
        assert!(validate_bank(&bank).is_empty());
    }

    #[test]
    fn missing_ids_are_assigned_after_max() {
        let toml = r#"
[bank]
name = "Auto"

[[categories]]
id = 1
type = "Science"

[[questions]]
question = "First?"
answer = "a"
category = 1

[[questions]]
id = 7
question = "Second?"
answer = "b"
category = 1

[[questions]]
question = "Third?"
answer = "c"
category = 1
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let ids: Vec<_> = bank.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![8, 7, 9]);
        assert_eq!(bank.questions[0].difficulty, 1);
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[bank]
name = "Dupes"

[[categories]]
id = 1
type = "Science"

[[questions]]
id = 3
question = "One?"
answer = "a"
category = 1

[[questions]]
id = 3
question = "Two?"
answer = "b"
category = 1
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate question ID")));
    }

    #[test]
    fn validate_unknown_category_and_bad_difficulty() {
        let toml = r#"
[bank]
name = "Broken"

[[categories]]
id = 1
type = "Science"

[[questions]]
id = 1
question = "Orphan?"
answer = "a"
category = 9
difficulty = 8
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("unknown category: 9")));
        assert!(warnings.iter().any(|w| w.message.contains("difficulty 8")));
        assert!(warnings.iter().any(|w| w.message.contains("has no questions")));
    }

    #[test]
    fn validate_blank_text() {
        let toml = r#"
[bank]
name = "Blank"

[[categories]]
id = 1
type = "Science"

[[questions]]
id = 1
question = "  "
answer = ""
category = 1
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message == "question text is empty"));
        assert!(warnings.iter().any(|w| w.message == "answer is empty"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("bank.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let bank = parse_bank(&file_path).unwrap();
        assert_eq!(bank.questions.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = parse_bank(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.toml"));
    }
}
