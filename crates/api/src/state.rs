use std::sync::Arc;

use dbarchitect_genai::DesignGenerator;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dbarchitect_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Design-generation service client.
    pub generator: Arc<dyn DesignGenerator>,
    /// Per-user session contexts.
    pub sessions: Arc<SessionStore>,
}
