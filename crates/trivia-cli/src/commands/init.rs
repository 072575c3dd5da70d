//! The `trivia init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create trivia.toml
    if std::path::Path::new("trivia.toml").exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write("trivia.toml", SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    // Create example bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add questions to banks/example.toml");
    println!("  2. Run: trivia validate --bank banks/example.toml");
    println!("  3. Run: trivia serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

bind = "127.0.0.1:5000"
questions_per_page = 10
bank = "banks/example.toml"
cors_max_age_secs = 3600
"#;

const EXAMPLE_BANK: &str = r#"[bank]
name = "Example Bank"
description = "A small example bank to get started"

[[categories]]
id = 1
type = "Science"

[[categories]]
id = 2
type = "Geography"

[[questions]]
id = 1
question = "What is the heaviest organ in the human body?"
answer = "The Liver"
category = 1
difficulty = 4

[[questions]]
id = 2
question = "Who discovered penicillin?"
answer = "Alexander Fleming"
category = 1
difficulty = 3

[[questions]]
id = 3
question = "What is the largest lake in Africa?"
answer = "Lake Victoria"
category = 2
difficulty = 2
"#;
