//! Handlers for comment endpoints nested under a post.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::comment::{CommentPayload, CommentResponse};
use crate::api::extract::{JsonBody, PathParams};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the comments of one post.
///
/// # Endpoint
///
/// `GET /v1/posts/{id}/comments/`
///
/// # Errors
///
/// Returns 404 Not Found if the post does not exist.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    PathParams(post_id): PathParams<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = state.comment_service.list(post_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// `GET /v1/posts/{id}/comments/{comment_id}/`
pub async fn get_comment_handler(
    State(state): State<AppState>,
    PathParams((post_id, id)): PathParams<(i64, i64)>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state.comment_service.get(post_id, id).await?;
    Ok(Json(comment.into()))
}

/// Adds a comment by the caller to a post.
///
/// # Endpoint
///
/// `POST /v1/posts/{id}/comments/`
///
/// # Request Body
///
/// ```json
/// { "text": "Nice post" }
/// ```
///
/// # Errors
///
/// - 401 if anonymous
/// - 404 if the post does not exist
/// - 400 if `text` is missing or blank
pub async fn create_comment_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParams(post_id): PathParams<i64>,
    payload: Result<JsonBody<CommentPayload>, AppError>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    state.comment_service.ensure_post_exists(post_id).await?;
    let JsonBody(payload) = payload?;

    let comment = state
        .comment_service
        .create(post_id, &user, payload.text)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// `PUT /v1/posts/{id}/comments/{comment_id}/`
pub async fn put_comment_handler(
    state: State<AppState>,
    user: CurrentUser,
    ids: PathParams<(i64, i64)>,
    payload: Result<JsonBody<CommentPayload>, AppError>,
) -> Result<Json<CommentResponse>, AppError> {
    update_comment(state, user, ids, payload, false).await
}

/// `PATCH /v1/posts/{id}/comments/{comment_id}/`
pub async fn patch_comment_handler(
    state: State<AppState>,
    user: CurrentUser,
    ids: PathParams<(i64, i64)>,
    payload: Result<JsonBody<CommentPayload>, AppError>,
) -> Result<Json<CommentResponse>, AppError> {
    update_comment(state, user, ids, payload, true).await
}

async fn update_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParams((post_id, id)): PathParams<(i64, i64)>,
    payload: Result<JsonBody<CommentPayload>, AppError>,
    partial: bool,
) -> Result<Json<CommentResponse>, AppError> {
    state.comment_service.get_owned(post_id, id, &user).await?;
    let JsonBody(payload) = payload?;

    let comment = state
        .comment_service
        .update(post_id, id, &user, payload.text, partial)
        .await?;

    Ok(Json(comment.into()))
}

/// `DELETE /v1/posts/{id}/comments/{comment_id}/`
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParams((post_id, id)): PathParams<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    state.comment_service.delete(post_id, id, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}
