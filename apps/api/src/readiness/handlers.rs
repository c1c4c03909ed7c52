//! Axum route handlers for the Readiness API.

use axum::{body::Bytes, extract::State, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::readiness::service::{run_job_readiness, JobReadinessRequest, JobReadinessResponse};
use crate::routes::parse_json_body;
use crate::state::AppState;

/// POST /api/job-readiness
///
/// Deterministic keyword readiness report. Only `overallScore` is perturbed.
pub async fn handle_job_readiness(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JobReadinessResponse>, AppError> {
    let request: JobReadinessRequest = parse_json_body(&body).map_err(|e| {
        warn!("job readiness body rejected: {e}");
        AppError::Validation("Invalid request body.".to_string())
    })?;

    let report = run_job_readiness(&state.taxonomy, state.jitter.as_ref(), &request)?;
    info!(
        role = %report.role,
        overall_score = report.overall_score,
        weak_areas = report.weak_areas.len(),
        "job readiness report served"
    );

    Ok(Json(report))
}
