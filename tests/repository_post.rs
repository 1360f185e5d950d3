mod common;

use sqlx::PgPool;
use std::sync::Arc;
use yatube_api::domain::entities::{NewPost, PostChanges};
use yatube_api::domain::repositories::{PageWindow, PostRepository};
use yatube_api::error::AppError;
use yatube_api::infrastructure::persistence::PgPostRepository;

#[sqlx::test]
async fn test_create_post(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let post = repo
        .create(NewPost {
            text: "hello".to_string(),
            author_id,
            group_id: None,
            image: Some("posts/a.png".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(post.text, "hello");
    assert_eq!(post.author, "leo");
    assert_eq!(post.image.as_deref(), Some("posts/a.png"));
}

#[sqlx::test]
async fn test_create_post_with_unknown_group(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let result = repo
        .create(NewPost {
            text: "hello".to_string(),
            author_id,
            group_id: Some(9999),
            image: None,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgPostRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(424242).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_window_and_count(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    for i in 0..4 {
        common::create_test_post(&pool, author_id, &format!("post {i}")).await;
    }
    let repo = PgPostRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 4);
    assert_eq!(repo.list(None).await.unwrap().len(), 4);

    let page = repo
        .list(Some(PageWindow { offset: 3, limit: 2 }))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].text, "post 3");
}

#[sqlx::test]
async fn test_update_applies_only_given_fields(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let group_id = common::create_test_group(&pool, "novels").await;
    let id = common::create_test_post(&pool, author_id, "draft").await;
    let repo = PgPostRepository::new(Arc::new(pool));

    let post = repo
        .update(
            id,
            PostChanges {
                group_id: Some(Some(group_id)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(post.text, "draft");
    assert_eq!(post.group_id, Some(group_id));

    let post = repo
        .update(
            id,
            PostChanges {
                text: Some("final".to_string()),
                group_id: Some(None),
                image: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(post.text, "final");
    assert_eq!(post.group_id, None);
}

#[sqlx::test]
async fn test_update_missing_post(pool: PgPool) {
    let repo = PgPostRepository::new(Arc::new(pool));

    let result = repo.update(424242, PostChanges::default()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_cascades_comments(pool: PgPool) {
    let author_id = common::create_test_user(&pool, "leo").await;
    let id = common::create_test_post(&pool, author_id, "bye").await;
    common::create_test_comment(&pool, id, author_id, "reply").await;
    let repo = PgPostRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());

    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(comments, 0);
}
