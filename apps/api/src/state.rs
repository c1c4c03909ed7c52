use std::sync::Arc;

use crate::config::Config;
use crate::critique::ResumeCritic;
use crate::leads::LeadStore;
use crate::readiness::perturbation::UniformSource;
use crate::readiness::taxonomy::Taxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Keyword taxonomy, built once at startup. Read-only.
    pub taxonomy: Arc<Taxonomy>,
    /// Random source for the displayed-score perturbation.
    pub jitter: Arc<dyn UniformSource>,
    /// Pluggable critic. `None` when no LLM key is configured.
    pub critic: Option<Arc<dyn ResumeCritic>>,
    pub leads: Arc<LeadStore>,
}
