use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub catalog: Arc<CareerCatalog>,
    /// Completion collaborator. Default: `LlmClient`; tests swap in a stub.
    pub llm: Arc<dyn CompletionClient>,
    pub feedback: FeedbackSink,
    pub config: Config,
}
