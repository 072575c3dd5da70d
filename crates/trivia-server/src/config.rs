//! Server configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trivia_core::QUESTIONS_PER_PAGE;

/// Top-level trivia server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Questions returned per listing page.
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,
    /// Question bank used to seed the store.
    #[serde(default)]
    pub bank: Option<PathBuf>,
    /// How long browsers may cache CORS preflight responses.
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age_secs: u64,
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_questions_per_page() -> usize {
    QUESTIONS_PER_PAGE
}
fn default_cors_max_age() -> u64 {
    60 * 60
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            questions_per_page: default_questions_per_page(),
            bank: None,
            cors_max_age_secs: default_cors_max_age(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again, so a value containing
/// `${...}` is kept literally.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from `trivia.toml` in the current directory, or defaults.
///
/// Environment variable overrides: `TRIVIA_BIND`, `TRIVIA_BANK`.
pub fn load_config() -> Result<TriviaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default location.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        local.exists().then_some(local)
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TriviaConfig::default(),
    };

    // Apply env var overrides
    if let Ok(bind) = std::env::var("TRIVIA_BIND") {
        config.bind = bind;
    }
    if let Ok(bank) = std::env::var("TRIVIA_BANK") {
        config.bank = Some(PathBuf::from(bank));
    }

    Ok(config)
}

/// Parse a TOML config string and resolve `${VAR}` references.
pub fn parse_config_str(content: &str) -> Result<TriviaConfig> {
    let mut config: TriviaConfig = toml::from_str(content)?;
    config.bind = resolve_env_vars(&config.bind);
    config.bank = config
        .bank
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    if config.questions_per_page == 0 {
        anyhow::bail!("questions_per_page must be at least 1");
    }
    Ok(config)
}
