#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidLink(String),

    #[error("Scrape failed: {0}")]
    Scrape(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidLink(msg) => (StatusCode::BAD_REQUEST, "INVALID_LINK", msg.clone()),
            AppError::Scrape(msg) => {
                tracing::error!("Scrape error: {msg}");
                (StatusCode::BAD_GATEWAY, "SCRAPE_FAILED", msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    format!("Error during AI processing: {msg}"),
                )
            }
            AppError::MalformedOutput(msg) => {
                tracing::warn!("Malformed model output: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MALFORMED_MODEL_OUTPUT",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_llm_error_body_carries_the_cause() {
        let (status, body) = body_json(AppError::Llm(
            "API error (status 401): Incorrect API key provided".to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Error during AI processing:"));
        assert!(message.contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_internal_error_body_stays_generic() {
        let (status, body) =
            body_json(AppError::Internal(anyhow::anyhow!("secret detail"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret detail"));
    }
}
