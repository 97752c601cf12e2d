use anyhow::{Context, Result};

use crate::extraction::prompts::PromptStyle;

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub prompt_style: PromptStyle,
    pub validate_timeout_secs: u64,
    pub scrape_timeout_secs: u64,
    pub max_page_chars: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            prompt_style: std::env::var("PROMPT_STYLE")
                .unwrap_or_else(|_| "standard".to_string())
                .parse()
                .context("PROMPT_STYLE must be 'standard' or 'strict-json'")?,
            validate_timeout_secs: parse_env_or("VALIDATE_TIMEOUT_SECS", 5)?,
            scrape_timeout_secs: parse_env_or("SCRAPE_TIMEOUT_SECS", 30)?,
            max_page_chars: parse_env_or("MAX_PAGE_CHARS", 48_000)?,
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number")),
        Err(_) => Ok(default),
    }
}
