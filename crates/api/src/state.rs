use std::sync::Arc;

use cinetrack_omdb::OmdbApi;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinetrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// OMDb metadata client.
    pub omdb: Arc<OmdbApi>,
}
