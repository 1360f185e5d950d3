//! Handlers for read-only group endpoints.

use axum::{Json, extract::State};

use crate::api::dto::group::GroupResponse;
use crate::api::extract::PathParams;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /v1/groups/`
pub async fn list_groups_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupResponse>>, AppError> {
    let groups = state.group_service.list().await?;
    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// `GET /v1/groups/{id}/`
pub async fn get_group_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = state.group_service.get(id).await?;
    Ok(Json(group.into()))
}
