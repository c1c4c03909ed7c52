//! Readiness service — the one place every transport goes through.
//!
//! Owns request validation (role enumeration, minimum length, truncation) and composes
//! scoring → insight → perturbation into the response shape. HTTP routes, the
//! serverless adapter and in-process callers all call `run_job_readiness`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::readiness::insight::generate_insight;
use crate::readiness::perturbation::{perturb, UniformSource};
use crate::readiness::scoring::{analyze, is_text_space, SkillAreaResult};
use crate::readiness::taxonomy::{Category, Role, Taxonomy};

pub const MIN_INPUT_CHARS: usize = 80;
pub const MAX_INPUT_CHARS: usize = 15_000;

#[derive(Debug, Default, Deserialize)]
pub struct JobReadinessRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Any JSON value: falsy values pick the default role, other non-strings are invalid.
    #[serde(default)]
    pub role: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReadinessResponse {
    pub ok: bool,
    pub overall_score: u32,
    pub skill_areas: Vec<SkillAreaResult>,
    pub weak_areas: Vec<Category>,
    pub insight: String,
    pub role: String,
}

/// Validated input, ready for scoring.
#[derive(Debug, PartialEq)]
pub struct ValidatedInput {
    pub text: String,
    pub role: Role,
}

pub fn validate_request(request: &JobReadinessRequest) -> Result<ValidatedInput, AppError> {
    let role = resolve_role(request.role.as_ref()).ok_or_else(|| {
        AppError::Validation(
            "Invalid role. Choose Backend Engineer, Full Stack Engineer, or Data Engineer."
                .to_string(),
        )
    })?;

    let text = request
        .text
        .as_deref()
        .unwrap_or_default()
        .trim_matches(is_text_space);
    if text.chars().count() < MIN_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "Please provide at least {MIN_INPUT_CHARS} characters of resume or job description text to analyze."
        )));
    }

    Ok(ValidatedInput {
        text: truncate_chars(text, MAX_INPUT_CHARS).to_string(),
        role,
    })
}

/// Missing, null, `false`, `0` and `""` select Backend Engineer. A string must be an
/// exact role label; any other value is rejected.
fn resolve_role(role: Option<&Value>) -> Option<Role> {
    match role {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Some(Role::Backend),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Some(Role::Backend),
        Some(Value::String(s)) if s.is_empty() => Some(Role::Backend),
        Some(Value::String(s)) => Role::from_label(s),
        Some(_) => None,
    }
}

/// Scores already-validated input. Only the overall score is perturbed.
pub fn build_report(
    taxonomy: &Taxonomy,
    jitter: &dyn UniformSource,
    input: &ValidatedInput,
) -> JobReadinessResponse {
    let analysis = analyze(taxonomy, &input.text, input.role.label());
    let insight = generate_insight(&analysis.role, &analysis.weak_areas);
    let overall_score = perturb(analysis.overall_score, jitter);

    debug!(
        role = %analysis.role,
        base_score = analysis.overall_score,
        displayed_score = overall_score,
        weak_areas = analysis.weak_areas.len(),
        "job readiness scored"
    );

    JobReadinessResponse {
        ok: true,
        overall_score,
        skill_areas: analysis.skill_areas,
        weak_areas: analysis.weak_areas,
        insight,
        role: analysis.role,
    }
}

pub fn run_job_readiness(
    taxonomy: &Taxonomy,
    jitter: &dyn UniformSource,
    request: &JobReadinessRequest,
) -> Result<JobReadinessResponse, AppError> {
    let input = validate_request(request)?;
    Ok(build_report(taxonomy, jitter, &input))
}

/// Cuts `text` to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
