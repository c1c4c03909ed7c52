//! Axum route handler for the critique API.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::critique::{Critique, MIN_RESUME_CHARS};
use crate::errors::AppError;
use crate::readiness::scoring::is_text_space;
use crate::routes::parse_json_body;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CritiqueRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub critique: Critique,
    pub score_class: &'static str,
}

/// POST /api/analyze
///
/// Qualitative LLM review. 503 with `useFallback` when the critic is not configured
/// or the call fails, so the client can stay on the keyword report.
pub async fn handle_critique(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CritiqueResponse>, AppError> {
    let request: CritiqueRequest = parse_json_body(&body)
        .map_err(|_| AppError::Validation("Invalid request".to_string()))?;

    let text = request
        .text
        .as_deref()
        .unwrap_or_default()
        .trim_matches(is_text_space);
    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation("Resume text too short".to_string()));
    }

    let critic = state
        .critic
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("LLM not configured".to_string()))?;

    let critique = critic.critique(text).await.map_err(|e| {
        error!("resume critique failed: {e}");
        match e {
            AppError::Transport(_) => e,
            _ => AppError::ServiceUnavailable("Analysis failed".to_string()),
        }
    })?;

    info!(score = critique.score, "resume critique served");
    let score_class = critique.score_class();
    Ok(Json(CritiqueResponse {
        ok: true,
        critique,
        score_class,
    }))
}
