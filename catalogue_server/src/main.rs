//! Catalogue API server: reads config from env (and `.env`), opens the SQLite
//! database, ensures tables, and serves the API and front-end pages.
//!
//! Run from repo root: `cargo run -p catalogue-server`

use catalogue_api::{app, connect, ensure_tables, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catalogue_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool).await?;

    let state = AppState::new(pool, config.static_dir.clone());
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
