//! Success response helpers. Bodies are the bare field mapping (or array of mappings).

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    tracing::debug!(count = data.len(), "returning list");
    (StatusCode::OK, Json(data))
}
