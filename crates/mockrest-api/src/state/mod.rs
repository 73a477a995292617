//! Application state
//!
//! Holds the shared store, the id generator, and configuration.

use std::sync::Arc;

use mockrest_common::AppConfig;
use mockrest_core::{IdGenerator, SharedStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    ids: Arc<dyn IdGenerator>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(store: SharedStore, ids: Arc<dyn IdGenerator>, config: AppConfig) -> Self {
        Self {
            store,
            ids,
            config: Arc::new(config),
        }
    }

    /// Get the resource store
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Generate a fresh record id
    pub fn generate_id(&self) -> String {
        self.ids.generate_id()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"SharedStore")
            .field("ids", &"IdGenerator")
            .field("config", &self.config)
            .finish()
    }
}
