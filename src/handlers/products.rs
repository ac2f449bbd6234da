//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::models::{NewProduct, ProductPayload};
use crate::response::{success_many, success_one};
use crate::service::{ProductService, RequestValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ProductService::list(&state.pool).await?;
    Ok(success_many(rows))
}

/// An absent id answers 200 with a `null` body.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let row = ProductService::get(&state.pool, id).await?;
    Ok(success_one(row))
}

pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new = NewProduct::from_payload(body)?;
    let row = ProductService::create(&state.pool, &new).await?;
    Ok(success_one(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(body): ValidJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let new = NewProduct::from_payload(body)?;
    let row = ProductService::update(&state.pool, id, &new).await?;
    Ok(success_one(row))
}

/// Answers with the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::parse_id(&id_str)?;
    let row = ProductService::delete(&state.pool, id).await?;
    Ok(success_one(row))
}
