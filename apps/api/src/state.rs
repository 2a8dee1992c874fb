use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::roles::RoleCatalog;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Production: `LlmClient`. Tests inject scripted generators.
    pub llm: Arc<dyn TextGenerator>,
    /// Immutable after startup.
    pub roles: Arc<RoleCatalog>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, roles: RoleCatalog, sessions: SessionStore) -> Self {
        Self {
            llm,
            roles: Arc::new(roles),
            sessions,
        }
    }

    /// Built-in catalog and an empty session store with default limits.
    #[cfg(test)]
    pub fn for_tests(llm: Arc<dyn TextGenerator>) -> Self {
        Self::new(llm, RoleCatalog::builtin(), SessionStore::default())
    }
}
