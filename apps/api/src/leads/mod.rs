//! Lead capture — append-only JSON log of email sign-ups.
//!
//! File layout: `{ "leads": [{email, source, ts}], "submitted": [email] }`.
//! Entries are only ever appended. A single async mutex serializes writers so two
//! requests never interleave their read-modify-write of the file. Each write goes to
//! a sibling temp file that is renamed over the log, so a crash never leaves it half
//! written. A log that fails to parse is moved aside, never overwritten.

pub mod handlers;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const DEFAULT_SOURCE: &str = "resume-check";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    pub source: String,
    /// RFC 3339, UTC, millisecond precision.
    pub ts: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LeadLog {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(default)]
    pub submitted: Vec<String>,
}

/// Loose shape check: something@something.tld, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
        .is_match(email)
}

pub struct LeadStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one lead and returns it. A missing file starts from empty; an
    /// unreadable one is preserved under a `.corrupt-<ts>` name first.
    pub async fn append(&self, email: &str, source: Option<&str>) -> Result<Lead> {
        let _guard = self.write_lock.lock().await;

        let mut log = self.load_for_append().await?;
        let lead = Lead {
            email: email.to_string(),
            source: source
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_SOURCE)
                .to_string(),
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        log.leads.push(lead.clone());
        log.submitted.push(lead.email.clone());

        let encoded = serde_json::to_vec_pretty(&log).context("Failed to encode lead log")?;
        let tmp = self.sibling("tmp");
        tokio::fs::write(&tmp, encoded)
            .await
            .with_context(|| format!("Failed to write lead log '{}'", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace lead log '{}'", self.path.display()))?;

        info!(source = %lead.source, total = log.leads.len(), "lead captured");
        Ok(lead)
    }

    /// Reads the whole log, treating a missing or unreadable file as empty.
    /// There is no query API; append goes through `load_for_append`.
    pub async fn load(&self) -> LeadLog {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return LeadLog::default(),
        };
        serde_json::from_slice(&raw).unwrap_or_default()
    }

    async fn load_for_append(&self) -> Result<LeadLog> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LeadLog::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read lead log '{}'", self.path.display()))
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(log) => Ok(log),
            Err(e) => {
                let aside = self.sibling(&format!("corrupt-{}", Utc::now().timestamp_millis()));
                tokio::fs::rename(&self.path, &aside).await.with_context(|| {
                    format!("Failed to move unreadable lead log to '{}'", aside.display())
                })?;
                warn!(
                    "Lead log '{}' is unreadable ({e}); kept as '{}', starting a fresh log",
                    self.path.display(),
                    aside.display()
                );
                Ok(LeadLog::default())
            }
        }
    }

    /// `leads.json` -> `leads.json.<suffix>` in the same directory.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}
