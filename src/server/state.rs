//! Shared server state.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::store::Store;
use crate::startup::ServerConfig;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Accounts, tokens and brief questions
    pub store: Arc<RwLock<Store>>,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with the seed admin from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Store::seeded(&config);
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Get a handle to the store.
    pub fn store(&self) -> Arc<RwLock<Store>> {
        Arc::clone(&self.store)
    }
}
