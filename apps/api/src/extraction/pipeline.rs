//! Extraction pipeline — orchestrates one click's worth of work.
//!
//! Flow: validate link → scrape → build prompt → LLM call → schema check.
//! Nothing is retried and nothing survives the request: every click repeats
//! the full sequence from scratch.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::models::ExtractionDocument;
use crate::extraction::prompts::{build_prompt, PromptStyle, SYSTEM_PROMPT};
use crate::extraction::scrape::scrape_page;
use crate::extraction::validator::validate_link;
use crate::llm_client::{strip_json_fences, ChatModel, TokenUsage};
use crate::state::AppState;

/// Result of a successful extraction.
///
/// `raw` is the model's response text exactly as received; `profile` is the
/// same text parsed against the documented schema.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub raw: String,
    pub profile: ExtractionDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Runs the full pipeline for one URL.
///
/// Steps:
/// 1. validate_link() — bounded GET, success + HTML or bail
/// 2. scrape_page() — second fetch, visible text, capped
/// 3. build_prompt() + ChatModel::chat() — single shot, no retry
/// 4. schema check — malformed output is its own error kind
pub async fn run_extraction(state: &AppState, url: &str) -> Result<ExtractionOutcome, AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    if url::Url::parse(url).is_err() {
        return Err(AppError::InvalidLink(format!(
            "'{url}' is not a well-formed absolute URL"
        )));
    }

    let valid = validate_link(
        &state.http,
        url,
        Duration::from_secs(state.config.validate_timeout_secs),
    )
    .await;
    if !valid {
        return Err(AppError::InvalidLink(
            "URL is unreachable or does not serve HTML".to_string(),
        ));
    }

    let page_text = scrape_page(
        &state.http,
        url,
        Duration::from_secs(state.config.scrape_timeout_secs),
        state.config.max_page_chars,
    )
    .await?;

    info!("Scraped {} chars from {url}", page_text.len());

    complete_from_page_text(state.llm.as_ref(), state.config.prompt_style, &page_text).await
}

/// Prompt-build, LLM call, and schema check for already-scraped page text.
pub async fn complete_from_page_text(
    llm: &dyn ChatModel,
    style: PromptStyle,
    page_text: &str,
) -> Result<ExtractionOutcome, AppError> {
    let prompt = build_prompt(style, page_text);

    let outcome = llm
        .chat(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let profile: ExtractionDocument = serde_json::from_str(strip_json_fences(&outcome.text))
        .map_err(|e| AppError::MalformedOutput(format!("response is not the expected JSON: {e}")))?;

    Ok(ExtractionOutcome {
        raw: outcome.text,
        profile,
        usage: outcome.usage,
    })
}
