pub mod draw;
pub mod init;
pub mod list;
pub mod play;
pub mod serve;
pub mod validate;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use trivia_core::categories::aggregate_categories;
use trivia_core::parser::{parse_bank, QuestionBank};
use trivia_core::CategoryId;

/// Load a bank and index its category labels.
fn load_bank(path: &Path) -> Result<(QuestionBank, BTreeMap<CategoryId, String>)> {
    let bank = parse_bank(path)?;
    let labels = aggregate_categories(&bank.categories);
    Ok((bank, labels))
}

fn category_label(labels: &BTreeMap<CategoryId, String>, id: CategoryId) -> String {
    labels
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("#{id}"))
}
