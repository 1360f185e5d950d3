mod common;

use sqlx::PgPool;
use std::sync::Arc;
use yatube_api::domain::entities::NewComment;
use yatube_api::domain::repositories::CommentRepository;
use yatube_api::error::AppError;
use yatube_api::infrastructure::persistence::PgCommentRepository;

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let post_id = common::create_test_post(&pool, author_id, "hello").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let comment = repo
        .create(NewComment {
            post_id,
            author_id,
            text: "first!".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(comment.author, "leo");
    assert_eq!(comment.post_id, post_id);

    let found = repo.find(post_id, comment.id).await.unwrap();
    assert_eq!(found.unwrap().text, "first!");
}

#[sqlx::test]
async fn test_find_is_scoped_to_post(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let first = common::create_test_post(&pool, author_id, "first").await;
    let second = common::create_test_post(&pool, author_id, "second").await;
    let id = common::create_test_comment(&pool, first, author_id, "reply").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    assert!(repo.find(second, id).await.unwrap().is_none());
    assert!(repo.list_by_post(second).await.unwrap().is_empty());
    assert_eq!(repo.list_by_post(first).await.unwrap().len(), 1);
    assert!(!repo.delete(second, id).await.unwrap());
}

#[sqlx::test]
async fn test_update_text(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let post_id = common::create_test_post(&pool, author_id, "hello").await;
    let id = common::create_test_comment(&pool, post_id, author_id, "typo").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let comment = repo
        .update_text(post_id, id, "fixed".to_string())
        .await
        .unwrap();
    assert_eq!(comment.text, "fixed");

    let result = repo.update_text(post_id, id + 1, "x".to_string()).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_create_on_missing_post(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let result = repo
        .create(NewComment {
            post_id: 424242,
            author_id,
            text: "into the void".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}
