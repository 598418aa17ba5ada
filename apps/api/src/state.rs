use std::sync::Arc;

use crate::config::Config;
use crate::provider::AiProvider;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable AI provider, resolved once at startup from AI_PROVIDER.
    /// Never re-resolved per request.
    pub provider: Arc<dyn AiProvider>,
    /// In-process rehearsal session registry. Relational persistence is an
    /// external collaborator; this holds only runtime state.
    pub sessions: SessionStore,
    /// Runtime settings; read at startup, kept for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
