//! Handlers for the caller's follow list.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::api::dto::follow::{FollowPayload, FollowQuery, FollowResponse};
use crate::api::extract::JsonBody;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the accounts the caller follows.
///
/// # Endpoint
///
/// `GET /v1/follow/?search=<term>`
///
/// `search` keeps follows whose followed username contains the term,
/// ignoring case.
///
/// # Errors
///
/// Returns 401 Unauthorized if anonymous.
pub async fn list_follows_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<FollowQuery>, QueryRejection>,
) -> Result<Json<Vec<FollowResponse>>, AppError> {
    let Query(query) = query?;
    let follows = state.follow_service.list(&user, query.search).await?;
    Ok(Json(follows.into_iter().map(Into::into).collect()))
}

/// Follows another account.
///
/// # Endpoint
///
/// `POST /v1/follow/`
///
/// # Request Body
///
/// ```json
/// { "following": "username" }
/// ```
///
/// # Errors
///
/// - 401 if anonymous
/// - 400 if `following` is blank, the caller's own name, or already followed
/// - 404 if no account has that username
pub async fn create_follow_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    JsonBody(payload): JsonBody<FollowPayload>,
) -> Result<(StatusCode, Json<FollowResponse>), AppError> {
    let follow = state.follow_service.create(&user, payload.following).await?;
    Ok((StatusCode::CREATED, Json(follow.into())))
}
