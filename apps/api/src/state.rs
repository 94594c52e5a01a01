use std::sync::Arc;

use crate::generation::registry::CategoryRegistry;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; concurrent requests share it freely.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind a trait object so tests can substitute a mock.
    pub llm: Arc<dyn CompletionBackend>,
    pub registry: Arc<CategoryRegistry>,
}
