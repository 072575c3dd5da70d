//! The `trivia play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use trivia_core::model::CategoryFilter;
use trivia_core::session::QuizSession;
use trivia_core::Selection;

use super::{category_label, load_bank};

pub fn execute(bank_path: PathBuf, category: CategoryFilter, rounds: Option<u32>) -> Result<()> {
    let (bank, labels) = load_bank(&bank_path)?;

    let mut session = QuizSession::new(category);
    if let Some(rounds) = rounds {
        session = session.with_max_rounds(rounds);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("Playing {} (category: {category})", bank.name);

    loop {
        let question = match session.next_question(&bank.questions)? {
            Selection::Question(q) => q,
            Selection::Exhausted => break,
        };

        println!(
            "\nQuestion {} [{}]: {}",
            session.previous_questions().len(),
            category_label(&labels, question.category),
            question.text
        );
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let answer = line?;

        if session.submit_answer(question, &answer)? {
            println!("Correct!");
        } else {
            println!("Wrong, the answer was: {}", question.answer);
        }
    }

    let score = session.score();
    println!("\nScore: {}/{}", score.correct, score.answered);

    Ok(())
}
