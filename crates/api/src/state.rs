use std::sync::Arc;

use pressing_core::storage_suggestion::StorageSuggester;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pressing_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Storage suggestion rules, loaded once at startup.
    pub suggester: Arc<StorageSuggester>,
}
