mod common;

use sqlx::PgPool;
use std::sync::Arc;
use yatube_api::domain::repositories::FollowRepository;
use yatube_api::error::AppError;
use yatube_api::infrastructure::persistence::PgFollowRepository;

#[sqlx::test]
async fn test_create_follow(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    let repo = PgFollowRepository::new(Arc::new(pool));

    let follow = repo.create(anna, leo).await.unwrap();

    assert_eq!(follow.user, "anna");
    assert_eq!(follow.following, "leo");
    assert!(repo.exists(anna, leo).await.unwrap());
    assert!(!repo.exists(leo, anna).await.unwrap());
}

#[sqlx::test]
async fn test_duplicate_follow_is_validation_error(pool: PgPool) {
    let leo = common::create_test_user(&pool, "leo").await;
    let anna = common::create_test_user(&pool, "anna").await;
    let repo = PgFollowRepository::new(Arc::new(pool));

    repo.create(anna, leo).await.unwrap();
    let err = repo.create(anna, leo).await.unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
    assert!(err.to_error_info().details["non_field_errors"].is_array());
}

#[sqlx::test]
async fn test_self_follow_rejected_by_database(pool: PgPool) {
    let anna = common::create_test_user(&pool, "anna").await;
    let repo = PgFollowRepository::new(Arc::new(pool));

    let err = repo.create(anna, anna).await.unwrap_err();

    assert!(err.to_error_info().details["following"].is_array());
}

#[sqlx::test]
async fn test_search_escapes_wildcards(pool: PgPool) {
    let plain = common::create_test_user(&pool, "leo").await;
    let marked = common::create_test_user(&pool, "le_o").await;
    let anna = common::create_test_user(&pool, "anna").await;
    common::create_test_follow(&pool, anna, plain).await;
    common::create_test_follow(&pool, anna, marked).await;
    let repo = PgFollowRepository::new(Arc::new(pool));

    let all = repo
        .list_for_user(anna, Some("le".to_string()))
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let underscore = repo
        .list_for_user(anna, Some("_".to_string()))
        .await
        .unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].following, "le_o");
}
