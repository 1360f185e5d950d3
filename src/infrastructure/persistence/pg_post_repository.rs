//! PostgreSQL implementation of post repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::domain::repositories::{PageWindow, PostRepository};
use crate::error::AppError;
use crate::utils::db_error::is_foreign_key_violation;
use serde_json::json;

/// Projection shared by every query: post columns plus the author's username.
const POST_PROJECTION: &str =
    "p.id, p.text, p.pub_date, p.author_id, u.username AS author, p.group_id, p.image";

/// PostgreSQL repository for posts.
///
/// Writes go through a CTE so the returned row is joined with `users`
/// in the same statement.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, group_id: Option<i64>) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::not_found(
            "Referenced object does not exist",
            json!({"group": [format!("Invalid pk \"{}\" - object does not exist.", group_id.unwrap_or_default())]}),
        );
    }
    e.into()
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO posts (text, author_id, group_id, image)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT {POST_PROJECTION}
            FROM p JOIN users u ON u.id = p.author_id
            "#
        );

        sqlx::query_as::<_, Post>(&sql)
            .bind(&new_post.text)
            .bind(new_post.author_id)
            .bind(new_post.group_id)
            .bind(&new_post.image)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, new_post.group_id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_PROJECTION} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        );

        Ok(sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?)
    }

    async fn list(&self, window: Option<PageWindow>) -> Result<Vec<Post>, AppError> {
        // NULL limit is LIMIT ALL, NULL offset is OFFSET 0.
        let sql = format!(
            r#"
            SELECT {POST_PROJECTION}
            FROM posts p JOIN users u ON u.id = p.author_id
            ORDER BY p.id
            LIMIT $1::BIGINT OFFSET $2::BIGINT
            "#
        );

        Ok(sqlx::query_as::<_, Post>(&sql)
            .bind(window.map(|w| w.limit))
            .bind(window.map(|w| w.offset))
            .fetch_all(self.pool.as_ref())
            .await?)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool.as_ref())
            .await?)
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, AppError> {
        let update_group = changes.group_id.is_some();
        let new_group = changes.group_id.flatten();
        let update_image = changes.image.is_some();
        let new_image = changes.image.flatten();

        let sql = format!(
            r#"
            WITH p AS (
                UPDATE posts SET
                    text     = COALESCE($2::TEXT, text),
                    group_id = CASE WHEN $3::BOOLEAN THEN $4::BIGINT ELSE group_id END,
                    image    = CASE WHEN $5::BOOLEAN THEN $6::TEXT ELSE image END
                WHERE id = $1
                RETURNING *
            )
            SELECT {POST_PROJECTION}
            FROM p JOIN users u ON u.id = p.author_id
            "#
        );

        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .bind(changes.text)
            .bind(update_group)
            .bind(new_group)
            .bind(update_image)
            .bind(new_image)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| map_write_error(e, new_group))?
            .ok_or_else(|| AppError::not_found("Post not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
