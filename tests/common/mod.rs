#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Duration;
use sqlx::PgPool;
use std::path::PathBuf;
use yatube_api::routes::api_router;
use yatube_api::state::AppState;
use yatube_api::utils::jwt::{JwtCodec, TokenKind};
use yatube_api::utils::password::hash_password;

pub const BASE_URL: &str = "http://testserver";
pub const TEST_PASSWORD: &str = "correct-horse";

/// 1x1 transparent PNG.
pub const PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn test_codec() -> JwtCodec {
    JwtCodec::new("test-signing-secret", Duration::minutes(5), Duration::days(1))
}

pub fn access_token(user_id: i64, username: &str) -> String {
    test_codec()
        .issue(TokenKind::Access, user_id, username)
        .unwrap()
}

pub fn refresh_token(user_id: i64, username: &str) -> String {
    test_codec()
        .issue(TokenKind::Refresh, user_id, username)
        .unwrap()
}

/// Fresh media directory per test.
pub fn temp_media_root() -> PathBuf {
    std::env::temp_dir().join(format!("yatube-media-{}", uuid::Uuid::new_v4().simple()))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, temp_media_root(), BASE_URL, test_codec())
}

pub fn make_server(pool: PgPool) -> TestServer {
    let app = api_router(create_test_state(pool));
    TestServer::new(app).unwrap()
}

/// Inserts an active user whose password is [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(hash_password(TEST_PASSWORD).unwrap())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn deactivate_user(pool: &PgPool, id: i64) {
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_group(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO groups (title, slug, description) VALUES ($1, $2, '') RETURNING id",
    )
    .bind(format!("Group {slug}"))
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_post(pool: &PgPool, author_id: i64, text: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO posts (text, author_id) VALUES ($1, $2) RETURNING id")
        .bind(text)
        .bind(author_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_comment(pool: &PgPool, post_id: i64, author_id: i64, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (post_id, author_id, text) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(post_id)
    .bind(author_id)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_follow(pool: &PgPool, user_id: i64, following_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO follows (user_id, following_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(following_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
