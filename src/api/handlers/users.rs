//! Handlers for read-only user profiles.

use axum::{Json, extract::State};

use crate::api::dto::user::UserResponse;
use crate::api::extract::PathParams;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /v1/users/`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_profiles().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// `GET /v1/users/{id}/`
pub async fn get_user_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_profile(id).await?;
    Ok(Json(user.into()))
}
