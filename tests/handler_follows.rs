mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_follow_requires_auth(pool: PgPool) {
    let server = common::make_server(pool);

    server.get("/v1/follow").await.assert_status_unauthorized();
    server
        .post("/v1/follow")
        .json(&json!({"following": "leo"}))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_create_follow(pool: PgPool) {
    common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;

    let server = common::make_server(pool);
    let response = server
        .post("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .json(&json!({"following": "leo", "user": "leo"}))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["user"], "anna");
    assert_eq!(body["following"], "leo");
}

#[sqlx::test]
async fn test_cannot_follow_self(pool: PgPool) {
    let anna = common::create_test_user(&pool, "anna").await;

    let server = common::make_server(pool);
    let response = server
        .post("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .json(&json!({"following": "anna"}))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"]["details"]["following"].is_array());
}

#[sqlx::test]
async fn test_duplicate_follow_rejected(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    common::create_test_follow(&pool, anna, leo).await;

    let server = common::make_server(pool);
    let response = server
        .post("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .json(&json!({"following": "leo"}))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"]["details"]["non_field_errors"].is_array());
}

#[sqlx::test]
async fn test_follow_unknown_user(pool: PgPool) {
    let anna = common::create_test_user(&pool, "anna").await;

    let server = common::make_server(pool);
    server
        .post("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .json(&json!({"following": "ghost"}))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_follow_missing_field(pool: PgPool) {
    let anna = common::create_test_user(&pool, "anna").await;

    let server = common::make_server(pool);
    let response = server
        .post("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"]["details"]["following"].is_array());
}

#[sqlx::test]
async fn test_list_only_own_follows(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    let boris = common::create_test_user(&pool, "boris").await;
    common::create_test_follow(&pool, anna, leo).await;
    common::create_test_follow(&pool, anna, boris).await;
    common::create_test_follow(&pool, boris, leo).await;

    let server = common::make_server(pool);
    let response = server
        .get("/v1/follow")
        .authorization_bearer(common::access_token(anna, "anna"))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let follows = body.as_array().unwrap();
    assert_eq!(follows.len(), 2);
    assert!(follows.iter().all(|f| f["user"] == "anna"));
}

#[sqlx::test]
async fn test_search_follows(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    let boris = common::create_test_user(&pool, "boris").await;
    common::create_test_follow(&pool, anna, leo).await;
    common::create_test_follow(&pool, anna, boris).await;

    let server = common::make_server(pool);
    let response = server
        .get("/v1/follow?search=LE")
        .authorization_bearer(common::access_token(anna, "anna"))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    let follows = body.as_array().unwrap();
    assert_eq!(follows.len(), 1);
    assert_eq!(follows[0]["following"], "leo");
}

#[sqlx::test]
async fn test_trailing_slash_path(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    common::create_test_follow(&pool, anna, leo).await;

    let server = common::make_server(pool);
    let response = server
        .get("/v1/follow/?search=leo")
        .authorization_bearer(common::access_token(anna, "anna"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_list_follows_invalid_query(pool: PgPool) {
    let anna = common::create_test_user(&pool, "anna").await;

    let server = common::make_server(pool);
    let response = server
        .get("/v1/follow?search=le&search=bo")
        .authorization_bearer(common::access_token(anna, "anna"))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["query"].is_array());
}
