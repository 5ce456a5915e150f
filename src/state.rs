//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::ClimateStore;

/// State handed to every handler.
///
/// Nothing in here is mutated after startup; the store hands out
/// per-request sessions on its own.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Climate store
    pub store: ClimateStore,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: ClimateStore) -> Self {
        Self { config, store }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: ClimateStore) -> Arc<Self> {
        Arc::new(Self::new(config, store))
    }
}
