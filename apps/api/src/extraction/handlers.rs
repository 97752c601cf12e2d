//! Axum route handlers for the extraction API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::pipeline::{run_extraction, ExtractionOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub url: String,
}

/// POST /api/v1/extract
///
/// Runs the whole pipeline for one URL and returns the model's raw response,
/// the schema-checked profile, and token usage when the provider reports it.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractionOutcome>, AppError> {
    let outcome = run_extraction(&state, &request.url).await?;
    Ok(Json(outcome))
}
