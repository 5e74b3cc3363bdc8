use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the database handle is internally reference
/// counted and the config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the application database.
    pub db: huntbase_db::Db,
    /// Server configuration (cookie flags, JWT settings, CORS).
    pub config: Arc<ServerConfig>,
}
