//! SQLite connection setup and table DDL for `product` and `user`.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Every table the service needs, in creation order.
pub const TABLES: [&str; 2] = ["product", "user"];

const PRODUCT_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS "product" (
        id INTEGER PRIMARY KEY,
        name VARCHAR(100) UNIQUE,
        "desc" VARCHAR(200),
        price REAL,
        qty INTEGER
    )
"#;

// email is deliberately not UNIQUE; login resolves duplicates by lowest id.
const USER_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER PRIMARY KEY,
        first_name VARCHAR(200),
        last_name VARCHAR(200),
        email VARCHAR(200),
        password VARCHAR(200)
    )
"#;

/// Open a pool on `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(database_url = %database_url, "database connected");
    Ok(pool)
}

/// Single-connection in-memory pool. Every connection to `:memory:` is a separate
/// database, so the one connection is kept alive for the pool's lifetime.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create `product` and `user` if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [PRODUCT_DDL, USER_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables ensured");
    Ok(())
}
