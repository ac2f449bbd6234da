//! Registration and login handlers.

use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::models::{Credentials, LoginPayload, NewUser, RegisterPayload};
use crate::response::success_one;
use crate::service::UserService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn register(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new = NewUser::from_payload(body)?;
    let user = UserService::register(&state.pool, new).await?;
    Ok(success_one(user))
}

pub async fn login(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = Credentials::from_payload(body)?;
    let user = UserService::login(&state.pool, credentials).await?;
    Ok(success_one(user))
}
