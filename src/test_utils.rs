use crate::store::{connect_in_memory, ensure_tables};
use sqlx::SqlitePool;
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

// Fresh in-memory database with both tables per call.
pub(crate) async fn setup_test_db() -> SqlitePool {
    init_test_tracing();
    let pool = connect_in_memory().await.expect("open in-memory sqlite");
    ensure_tables(&pool).await.expect("create tables");
    pool
}
