//! The `trivia validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let bank = trivia_core::parser::parse_bank(&bank_path)?;

    println!(
        "Bank: {} ({} questions, {} categories)",
        bank.name,
        bank.questions.len(),
        bank.categories.len()
    );

    let warnings = trivia_core::parser::validate_bank(&bank);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
