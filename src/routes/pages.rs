//! Front-end page routes and the 404 fallback. GET /login and GET /register share
//! their paths with the POST routes in `auth_routes`; merging combines the methods.

use crate::handlers::pages::{catalogue, index, login, not_found, register};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/catalogue", get(catalogue))
        .fallback(not_found)
        .with_state(state)
}
