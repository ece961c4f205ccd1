use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::pipeline::Pipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend. Production: `GeminiClient`; tests swap in a stub.
    pub generator: Arc<dyn TextGenerator>,
    pub pipeline: Pipeline,
    pub config: Config,
}
