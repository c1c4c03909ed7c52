use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::leads::is_valid_email;
use crate::routes::parse_json_body;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// POST /api/lead
pub async fn handle_lead(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request: LeadRequest = parse_json_body(&body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid lead body: {e}")))?;

    let email = request.email.as_deref().unwrap_or_default().trim();
    if email.is_empty() || !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email".to_string()));
    }

    state
        .leads
        .append(email, request.source.as_deref())
        .await?;

    Ok(Json(json!({ "ok": true })))
}
