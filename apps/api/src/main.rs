mod advisor;
mod catalog;
mod config;
mod errors;
mod feedback;
mod llm_client;
mod models;
mod resume;
mod routes;
mod skills;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Counselor API v{}", env!("CARGO_PKG_VERSION"));

    // Load the career catalog; a malformed source aborts startup
    let catalog = CareerCatalog::load_path(&config.careers_csv).with_context(|| {
        format!(
            "Failed to load career catalog from {}",
            config.careers_csv.display()
        )
    })?;
    if catalog.is_empty() {
        warn!("Career catalog is empty; catalog matching will never return a career");
    }

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.llm_max_attempts,
    )?;
    info!(
        "LLM client initialized (model: {}, attempts per call: {})",
        llm_client::MODEL,
        config.llm_max_attempts
    );

    let feedback = FeedbackSink::new(config.feedback_log.clone());
    info!("Feedback will be appended to {}", feedback.path().display());

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        llm: Arc::new(llm),
        feedback,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
