//! Route groups and the assembled application router.

mod auth;
mod common;
mod pages;
mod products;

pub use auth::auth_routes;
pub use common::common_routes;
pub use pages::page_routes;
pub use products::product_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Every route group merged, with request tracing and a body size limit.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(auth_routes(state.clone()))
        .merge(page_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
}
