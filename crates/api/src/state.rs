use std::sync::Arc;

use marquee_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The movie collection.
    pub store: SharedStore,
    /// Server configuration (origin allow-list, timeouts).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: SharedStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
