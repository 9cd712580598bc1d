//! Application state for the HTTP server.

use std::sync::Arc;

use super::auth::TokenStore;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn FullRepository>,
    /// Issued auth tokens (the credential collaborator's seam)
    pub tokens: TokenStore,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            tokens: TokenStore::new(),
        }
    }
}
