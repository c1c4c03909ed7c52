//! Resume critique — optional qualitative review via the LLM.
//!
//! Independent of the deterministic readiness scorer: nothing here reads the taxonomy
//! and the scorer never consults a critic. When no API key is configured the route
//! answers 503 with `useFallback` so clients stay on the keyword report.
//!
//! `AppState` holds an `Option<Arc<dyn ResumeCritic>>`, swapped at startup via config.

pub mod handlers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::prompts::{critique_prompt, RESUME_CRITIQUE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::readiness::service::truncate_chars;

pub const MIN_RESUME_CHARS: usize = 50;
/// Characters of resume text forwarded to the model.
pub const MAX_PROMPT_CHARS: usize = 12_000;
const DEFAULT_SCORE: f64 = 50.0;
const DEFAULT_SUMMARY: &str = "Review complete.";

/// Normalized critique returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Critique {
    pub score: u32,
    pub score_summary: String,
    pub good: Vec<String>,
    pub fix: Vec<String>,
}

impl Critique {
    /// CSS band used by the front end.
    pub fn score_class(&self) -> &'static str {
        if self.score >= 70 {
            "score-good"
        } else if self.score >= 50 {
            "score-ok"
        } else {
            "score-bad"
        }
    }
}

/// Model output before normalization. Every field is optional; models drift.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCritique {
    #[serde(default)]
    pub score: Value,
    #[serde(default)]
    pub score_summary: Option<String>,
    #[serde(default)]
    pub good: Value,
    #[serde(default)]
    pub fix: Value,
}

impl RawCritique {
    /// Missing, non-numeric or zero scores become 50; everything is clamped to 0–100.
    pub fn normalize(self) -> Critique {
        let score = match &self.score {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|s| s.is_finite() && *s != 0.0)
        .unwrap_or(DEFAULT_SCORE)
        .clamp(0.0, 100.0)
        .round() as u32;

        Critique {
            score,
            score_summary: self
                .score_summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            good: string_list(self.good),
            fix: string_list(self.fix),
        }
    }
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// The critique trait. Implement this to swap backends without touching the handler.
#[async_trait]
pub trait ResumeCritic: Send + Sync {
    async fn critique(&self, resume_text: &str) -> Result<Critique, AppError>;
}

/// Critic backed by the chat-completions client.
pub struct LlmCritic(pub LlmClient);

#[async_trait]
impl ResumeCritic for LlmCritic {
    async fn critique(&self, resume_text: &str) -> Result<Critique, AppError> {
        let prompt = critique_prompt(truncate_chars(resume_text, MAX_PROMPT_CHARS));
        let raw: RawCritique = self.0.call_json(&prompt, RESUME_CRITIQUE_SYSTEM).await?;
        Ok(raw.normalize())
    }
}
