use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted and
/// the config sits behind `Arc`). Nothing in here is mutable: the core is
/// read-only and carries no cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: movies_db::DbPool,
    /// Server configuration (page size, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}
