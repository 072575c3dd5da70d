//! The `trivia draw` command.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;

use trivia_core::model::{CategoryFilter, QuestionId};
use trivia_core::{select_quiz_question, Selection};

use super::{category_label, load_bank};

pub fn execute(bank_path: PathBuf, category: CategoryFilter, exclude: Vec<QuestionId>) -> Result<()> {
    let (bank, labels) = load_bank(&bank_path)?;
    let excluded: HashSet<QuestionId> = exclude.into_iter().collect();

    match select_quiz_question(&bank.questions, category, &excluded) {
        Selection::Question(q) => {
            println!(
                "[{}] ({}, difficulty {}) {}",
                q.id,
                category_label(&labels, q.category),
                q.difficulty,
                q.text
            );
            println!("Answer: {}", q.answer);
        }
        Selection::Exhausted => println!("No questions remain."),
    }

    Ok(())
}
