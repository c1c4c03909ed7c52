use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The scoring core never produces these; they come from request validation and the
/// auxiliary services (LLM critique, lead store, PDF extraction).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    /// Optional feature not configured. Clients should fall back to the deterministic check.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ServiceUnavailable(_) | AppError::Transport(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body shared by the HTTP routes and the serverless adapter.
    pub fn body(&self) -> serde_json::Value {
        let (code, message) = match self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::MethodNotAllowed => ("METHOD_NOT_ALLOWED", "Method not allowed".to_string()),
            AppError::Unprocessable(msg) => ("UNPROCESSABLE_ENTITY", msg.clone()),
            AppError::ServiceUnavailable(msg) => ("SERVICE_UNAVAILABLE", msg.clone()),
            AppError::Transport(e) => {
                tracing::error!("Transport error: {e}");
                ("TRANSPORT_ERROR", "Analysis failed".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                ("INTERNAL_ERROR", "Server error".to_string())
            }
        };

        let mut body = json!({
            "ok": false,
            "error": message,
            "code": code,
        });
        if matches!(
            self,
            AppError::ServiceUnavailable(_) | AppError::Transport(_)
        ) {
            body["useFallback"] = json!(true);
        }
        body
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
