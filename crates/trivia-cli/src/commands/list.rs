//! The `trivia list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use trivia_core::paginate::{page_count, paginate};
use trivia_core::search::search_questions;
use trivia_core::{CategoryId, MemoryStore, Question, QuestionStore};

use super::{category_label, load_bank};

pub async fn execute(
    bank_path: PathBuf,
    page: usize,
    page_size: usize,
    category: Option<CategoryId>,
    search: Option<String>,
) -> Result<()> {
    let (bank, labels) = load_bank(&bank_path)?;
    let store = MemoryStore::from_bank(bank);

    let mut questions = match category {
        Some(id) => store.list_by_category(id).await?,
        None => store.list_all().await?,
    };
    if let Some(term) = &search {
        questions = search_questions(&questions, term)
            .into_iter()
            .cloned()
            .collect::<Vec<Question>>();
    }

    let slice = paginate(&questions, page, page_size)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category", "Difficulty", "Question", "Answer"]);
    for q in slice {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(category_label(&labels, q.category)),
            Cell::new(q.difficulty),
            Cell::new(&q.text),
            Cell::new(&q.answer),
        ]);
    }

    println!("{table}");
    println!(
        "Page {page} of {} ({} questions)",
        page_count(questions.len(), page_size),
        questions.len()
    );

    Ok(())
}
