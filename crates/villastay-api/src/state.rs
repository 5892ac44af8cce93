//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use villastay_core::config::AppConfig;
use villastay_database::repositories::villa::VillaRepository;
use villastay_database::repositories::villa_number::VillaNumberRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Villa repository.
    pub villa_repo: Arc<VillaRepository>,
    /// Villa number repository.
    pub villa_number_repo: Arc<VillaNumberRepository>,
}

impl AppState {
    /// Build the state from configuration and a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let villa_repo = Arc::new(VillaRepository::new(db_pool.clone()));
        let villa_number_repo = Arc::new(VillaNumberRepository::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            villa_repo,
            villa_number_repo,
        }
    }
}
