//! Operational routes: liveness, schema readiness, build version.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::TABLES;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Readiness {
    ready: bool,
    /// Tables from the catalogue schema that are not present yet.
    missing_tables: Vec<&'static str>,
}

#[derive(Serialize)]
struct Version {
    name: &'static str,
    version: &'static str,
}

async fn live() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn missing_tables(state: &AppState) -> Result<Vec<&'static str>, AppError> {
    let present: Vec<(String,)> = sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(&state.pool)
        .await?;
    Ok(TABLES
        .iter()
        .copied()
        .filter(|t| !present.iter().any(|(name,)| name == t))
        .collect())
}

/// 200 once the database answers and both tables exist, 503 otherwise.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match missing_tables(&state).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            Json(Readiness {
                ready: true,
                missing_tables: missing,
            }),
        ),
        Ok(missing) => {
            tracing::warn!(?missing, "schema incomplete");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    ready: false,
                    missing_tables: missing,
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    ready: false,
                    missing_tables: TABLES.to_vec(),
                }),
            )
        }
    }
}

async fn version() -> Json<Version> {
    Json(Version {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /live, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/live", get(live))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
