//! Handlers for post endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::api::dto::pagination::{LimitOffsetParams, ListResponse, Page};
use crate::api::dto::post::PostResponse;
use crate::api::extract::{PathParams, PostForm};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists posts ordered by ID.
///
/// # Endpoint
///
/// `GET /v1/posts/`
///
/// # Query Parameters
///
/// - `limit` (optional): page size; enables pagination when present
/// - `offset` (optional): number of posts to skip, default 0
///
/// # Response
///
/// Without `limit`, a JSON array. With `limit`:
///
/// ```json
/// {
///   "count": 5,
///   "next": "http://localhost:3000/v1/posts/?limit=2&offset=3",
///   "previous": "http://localhost:3000/v1/posts/?limit=2",
///   "results": [ ... ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is not a positive integer or `offset`
/// is negative.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    params: Result<Query<LimitOffsetParams>, QueryRejection>,
) -> Result<Json<ListResponse<PostResponse>>, AppError> {
    let Query(params) = params?;

    let render = |posts: Vec<_>| {
        posts
            .into_iter()
            .map(|post| PostResponse::new(post, &state.base_url))
            .collect::<Vec<_>>()
    };

    let Some(window) = params.window()? else {
        let posts = state.post_service.list().await?;
        return Ok(Json(ListResponse::All(render(posts))));
    };

    let page = state.post_service.list_page(window).await?;
    let url = format!("{}/v1/posts/", state.base_url);

    Ok(Json(ListResponse::Page(Page::new(
        render(page.posts),
        page.total,
        window,
        &url,
    ))))
}

/// Retrieves a single post.
///
/// # Endpoint
///
/// `GET /v1/posts/{id}/`
pub async fn get_post_handler(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.post_service.get(id).await?;
    Ok(Json(PostResponse::new(post, &state.base_url)))
}

/// Creates a post authored by the caller.
///
/// # Endpoint
///
/// `POST /v1/posts/`
///
/// # Request Body
///
/// JSON, or `multipart/form-data` with the same field names:
///
/// ```json
/// {
///   "text": "Hello",
///   "group": 1,                                // optional, may be null
///   "image": "data:image/png;base64,iVBOR..."  // optional, may be null
/// }
/// ```
///
/// Any `author` in the body is ignored.
///
/// # Errors
///
/// - 401 if anonymous
/// - 400 if `text` is missing or blank, or `image` is not an image
/// - 404 if `group` does not exist
pub async fn create_post_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PostForm(input): PostForm,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = state.post_service.create(&user, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse::new(post, &state.base_url)),
    ))
}

/// Replaces a post (`PUT /v1/posts/{id}/`). `text` is required.
pub async fn put_post_handler(
    state: State<AppState>,
    user: CurrentUser,
    id: PathParams<i64>,
    payload: Result<PostForm, AppError>,
) -> Result<Json<PostResponse>, AppError> {
    update_post(state, user, id, payload, false).await
}

/// Partially updates a post (`PATCH /v1/posts/{id}/`).
pub async fn patch_post_handler(
    state: State<AppState>,
    user: CurrentUser,
    id: PathParams<i64>,
    payload: Result<PostForm, AppError>,
) -> Result<Json<PostResponse>, AppError> {
    update_post(state, user, id, payload, true).await
}

/// Shared update flow: 401 → 404 → 403 → 400.
///
/// The body is parsed before the handler runs, so its error is held back
/// until the post has been found and authorship checked.
async fn update_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParams(id): PathParams<i64>,
    payload: Result<PostForm, AppError>,
    partial: bool,
) -> Result<Json<PostResponse>, AppError> {
    state.post_service.get_owned(id, &user).await?;
    let PostForm(input) = payload?;

    let post = state
        .post_service
        .update(id, &user, input, partial)
        .await?;

    Ok(Json(PostResponse::new(post, &state.base_url)))
}

/// Deletes a post with its comments.
///
/// # Endpoint
///
/// `DELETE /v1/posts/{id}/`
///
/// # Errors
///
/// - 401 if anonymous
/// - 404 if the post does not exist
/// - 403 if the caller is not the author
pub async fn delete_post_handler(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    PathParams(id): PathParams<i64>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete(id, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}
