//! Serverless-function adapter.
//!
//! Takes a function-style event (`{httpMethod, body}`) and returns a function-style
//! response (`{statusCode, headers, body}`) with the body already encoded as a JSON
//! string. Scoring goes through the same `run_job_readiness` as the HTTP route; this
//! module only translates envelopes.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::readiness::perturbation::UniformSource;
use crate::readiness::service::{run_job_readiness, JobReadinessRequest};
use crate::readiness::taxonomy::Taxonomy;
use crate::routes::parse_json_body;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    fn json(status: StatusCode, body: &impl Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
        Self {
            status_code: status.as_u16(),
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body,
        }
    }

    fn error(err: AppError) -> Self {
        Self::json(err.status(), &err.body())
    }
}

/// Handles one function invocation.
pub fn handle_event(
    taxonomy: &Taxonomy,
    jitter: &dyn UniformSource,
    event: &FunctionEvent,
) -> FunctionResponse {
    if !event.http_method.eq_ignore_ascii_case("POST") {
        return FunctionResponse::error(AppError::MethodNotAllowed);
    }

    let raw = event.body.as_deref().unwrap_or_default();
    let request: JobReadinessRequest = match parse_json_body(raw.as_bytes()) {
        Ok(request) => request,
        Err(e) => {
            warn!("function event body rejected: {e}");
            return FunctionResponse::error(AppError::Validation(
                "Invalid request body.".to_string(),
            ));
        }
    };

    match run_job_readiness(taxonomy, jitter, &request) {
        Ok(report) => FunctionResponse::json(StatusCode::OK, &report),
        Err(err) => FunctionResponse::error(err),
    }
}

/// ANY /.netlify/functions/job-readiness
///
/// Mounts the adapter on the embedded server so hosted and self-hosted deployments
/// answer the same path.
pub async fn handle_function_route(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    let event = FunctionEvent {
        http_method: method.to_string(),
        body: Some(String::from_utf8_lossy(&body).into_owned()),
    };
    let result = handle_event(&state.taxonomy, state.jitter.as_ref(), &event);
    into_http_response(result)
}

fn into_http_response(result: FunctionResponse) -> Response {
    let status = StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = (status, result.body).into_response();
    for (name, value) in &result.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            response.headers_mut().insert(name, value);
        }
    }
    response
}
