//! trivia CLI, the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trivia_core::model::{CategoryFilter, QuestionId};

mod commands;

#[derive(Parser)]
#[command(name = "trivia", version, about = "Trivia question bank server and quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Question bank TOML file (overrides config)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a question bank TOML file
    Validate {
        /// Path to the question bank
        #[arg(long)]
        bank: PathBuf,
    },

    /// List one page of questions
    List {
        /// Path to the question bank
        #[arg(long)]
        bank: PathBuf,

        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,

        /// Questions per page
        #[arg(long, default_value = "10")]
        page_size: usize,

        /// Only list this category
        #[arg(long)]
        category: Option<u32>,

        /// Only list questions containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Draw one random quiz question
    Draw {
        /// Path to the question bank
        #[arg(long)]
        bank: PathBuf,

        /// Category id, or "any"
        #[arg(long, default_value = "any")]
        category: CategoryFilter,

        /// Question ids already served (comma-separated)
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<QuestionId>,
    },

    /// Play a quiz on the terminal
    Play {
        /// Path to the question bank
        #[arg(long)]
        bank: PathBuf,

        /// Category id, or "any"
        #[arg(long, default_value = "any")]
        category: CategoryFilter,

        /// Stop after this many questions
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bank, bind, config } => commands::serve::execute(bank, bind, config).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::List {
            bank,
            page,
            page_size,
            category,
            search,
        } => commands::list::execute(bank, page, page_size, category, search).await,
        Commands::Draw {
            bank,
            category,
            exclude,
        } => commands::draw::execute(bank, category, exclude),
        Commands::Play {
            bank,
            category,
            rounds,
        } => commands::play::execute(bank, category, rounds),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
