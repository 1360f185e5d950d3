//! API route configuration.
//!
//! Routes are declared without trailing slashes; the top-level router trims
//! them from incoming requests, so `/v1/posts/` and `/v1/posts` both match.

use crate::api::handlers::{
    create_comment_handler, create_follow_handler, create_post_handler, create_token_handler,
    delete_comment_handler, delete_post_handler, get_comment_handler, get_group_handler,
    get_post_handler, get_user_handler, list_comments_handler, list_follows_handler,
    list_groups_handler, list_posts_handler, list_users_handler, patch_comment_handler,
    patch_post_handler, put_comment_handler, put_post_handler, refresh_token_handler,
    verify_token_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Resource routes. Reads are public except the follow list; writes need a
/// user attached by [`crate::api::middleware::auth::layer`].
///
/// # Endpoints
///
/// - `GET    /posts`                            - List posts (optional limit/offset)
/// - `POST   /posts`                            - Create a post
/// - `GET    /posts/{id}`                       - Retrieve a post
/// - `PUT    /posts/{id}`                       - Replace a post (author only)
/// - `PATCH  /posts/{id}`                       - Update a post (author only)
/// - `DELETE /posts/{id}`                       - Delete a post (author only)
/// - `GET    /posts/{id}/comments`              - List a post's comments
/// - `POST   /posts/{id}/comments`              - Comment on a post
/// - `GET    /posts/{id}/comments/{comment_id}` - Retrieve a comment
/// - `PUT    /posts/{id}/comments/{comment_id}` - Replace a comment (author only)
/// - `PATCH  /posts/{id}/comments/{comment_id}` - Update a comment (author only)
/// - `DELETE /posts/{id}/comments/{comment_id}` - Delete a comment (author only)
/// - `GET    /groups`, `/groups/{id}`           - Groups
/// - `GET    /follow`                           - The caller's follows (auth)
/// - `POST   /follow`                           - Follow a user (auth)
/// - `GET    /users`, `/users/{id}`             - Public profiles
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            get(get_post_handler)
                .put(put_post_handler)
                .patch(patch_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/posts/{id}/comments",
            get(list_comments_handler).post(create_comment_handler),
        )
        .route(
            "/posts/{id}/comments/{comment_id}",
            get(get_comment_handler)
                .put(put_comment_handler)
                .patch(patch_comment_handler)
                .delete(delete_comment_handler),
        )
        .route("/groups", get(list_groups_handler))
        .route("/groups/{id}", get(get_group_handler))
        .route(
            "/follow",
            get(list_follows_handler).post(create_follow_handler),
        )
        .route("/users", get(list_users_handler))
        .route("/users/{id}", get(get_user_handler))
}

/// JWT routes. These take credentials in the body and never read the
/// `Authorization` header.
///
/// - `POST /jwt/create`  - Obtain an access/refresh pair
/// - `POST /jwt/refresh` - Exchange a refresh token for an access token
/// - `POST /jwt/verify`  - Check a token
pub fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt/create", post(create_token_handler))
        .route("/jwt/refresh", post(refresh_token_handler))
        .route("/jwt/verify", post(verify_token_handler))
}
