use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable: each request gets the same clients and config and
/// keeps no state behind for the next click.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for the validation and scrape fetches.
    /// Per-purpose timeouts are set on each request.
    pub http: reqwest::Client,
    /// Pluggable chat model. Production: `OpenAiClient`. Tests: stubs.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
