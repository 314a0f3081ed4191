use std::sync::Arc;
use std::time::Instant;

use gazette_db::featured::FeaturedSet;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gazette_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Featured-set manager backing the carousel endpoints.
    pub featured: FeaturedSet,
    /// Process start, reported as uptime by `/health`.
    pub started_at: Instant,
}

impl AppState {
    /// State whose featured set is stored in the same PostgreSQL pool.
    pub fn new(pool: gazette_db::DbPool, config: ServerConfig) -> Self {
        Self {
            featured: FeaturedSet::postgres(pool.clone()),
            pool,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
