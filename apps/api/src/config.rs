use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is required; the LLM critique is disabled when no API key is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_api_key: Option<String>,
    pub leads_file: PathBuf,
    pub static_dir: PathBuf,
    /// Seeds the score perturbation for reproducible demos. Unset in production.
    pub score_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3456".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            leads_file: optional_env("LEADS_FILE")
                .unwrap_or_else(|| "leads.json".to_string())
                .into(),
            static_dir: optional_env("STATIC_DIR")
                .unwrap_or_else(|| "public".to_string())
                .into(),
            score_seed: optional_env("SCORE_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("SCORE_SEED must be an unsigned integer")?,
        })
    }
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
