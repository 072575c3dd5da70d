//! The `trivia serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use trivia_core::parser::{parse_bank, validate_bank};
use trivia_core::MemoryStore;
use trivia_server::config::load_config_from;

pub async fn execute(
    bank: Option<PathBuf>,
    bind: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(bank) = bank {
        config.bank = Some(bank);
    }
    if let Some(bind) = bind {
        config.bind = bind;
    }

    let bank_path = config
        .bank
        .clone()
        .context("no question bank configured; pass --bank or set `bank` in trivia.toml")?;
    let bank = parse_bank(&bank_path)?;

    for w in validate_bank(&bank) {
        match w.question_id {
            Some(id) => warn!("bank question {id}: {}", w.message),
            None => warn!("bank: {}", w.message),
        }
    }
    info!(
        "Loaded bank '{}' ({} questions, {} categories)",
        bank.name,
        bank.questions.len(),
        bank.categories.len()
    );

    let store = Arc::new(MemoryStore::from_bank(bank));
    trivia_server::serve(config, store).await
}
