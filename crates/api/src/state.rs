use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lore_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled page templates.
    pub views: Arc<Views>,
}
