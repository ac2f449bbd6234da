//! Fixed HTML pages for the front-end routes and the catch-all 404 page.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;

pub const INDEX_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";
pub const REGISTER_PAGE: &str = "register.html";
pub const CATALOGUE_PAGE: &str = "catalogue.html";
pub const NOT_FOUND_PAGE: &str = "404.html";

async fn read_page(state: &AppState, file: &str) -> Result<Html<String>, AppError> {
    let path = state.static_dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "page unreadable");
            Err(AppError::Internal(format!("page {} unreadable", file)))
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    read_page(&state, INDEX_PAGE).await
}

pub async fn login(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    read_page(&state, LOGIN_PAGE).await
}

pub async fn register(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    read_page(&state, REGISTER_PAGE).await
}

pub async fn catalogue(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    read_page(&state, CATALOGUE_PAGE).await
}

/// Fallback for unmatched paths. Without a 404 page the JSON not_found body is used.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<(StatusCode, Html<String>), AppError> {
    match read_page(&state, NOT_FOUND_PAGE).await {
        Ok(html) => Ok((StatusCode::NOT_FOUND, html)),
        Err(_) => Err(AppError::NotFound(uri.path().to_string())),
    }
}
