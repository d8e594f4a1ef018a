use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;
use crate::store::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Seeded in-memory record store; read-only on the request path.
    pub catalog: Arc<Catalog>,
    /// Completion backend behind a trait so tests can stub model replies.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
}
