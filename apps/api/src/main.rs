mod config;
mod critique;
mod errors;
mod extract;
mod leads;
mod llm_client;
mod readiness;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::critique::{LlmCritic, ResumeCritic};
use crate::leads::LeadStore;
use crate::llm_client::LlmClient;
use crate::readiness::perturbation::{SeededSource, ThreadRngSource, UniformSource};
use crate::readiness::taxonomy::Taxonomy;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    let taxonomy = Arc::new(Taxonomy::standard());

    let jitter: Arc<dyn UniformSource> = match config.score_seed {
        Some(seed) => {
            warn!("SCORE_SEED={seed} set: displayed scores are reproducible");
            Arc::new(SeededSource::new(seed))
        }
        None => Arc::new(ThreadRngSource),
    };

    // Critique is optional; without a key the route answers 503 + useFallback
    let critic: Option<Arc<dyn ResumeCritic>> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM critique: enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmCritic(llm)))
        }
        None => {
            info!("LLM critique: disabled (set OPENAI_API_KEY to enable)");
            None
        }
    };

    let leads = Arc::new(LeadStore::new(config.leads_file.clone()));
    info!("Leads saved to {}", leads.path().display());
    info!("Serving static files from {}", config.static_dir.display());

    let state = AppState {
        config: config.clone(),
        taxonomy,
        jitter,
        critic,
        leads,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
