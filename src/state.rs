//! Shared application state, constructed once at startup and injected into every route.

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Directory holding the front-end HTML pages.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(pool: SqlitePool, static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            pool,
            static_dir: Arc::new(static_dir.into()),
        }
    }
}
