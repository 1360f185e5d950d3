//! PostgreSQL implementation of comment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;
use crate::utils::db_error::is_foreign_key_violation;
use serde_json::json;

const COMMENT_PROJECTION: &str =
    "c.id, c.post_id, c.author_id, u.username AS author, c.text, c.created";

/// PostgreSQL repository for comments. Every statement filters on `post_id`.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let sql = format!(
            r#"
            WITH c AS (
                INSERT INTO comments (post_id, author_id, text)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT {COMMENT_PROJECTION}
            FROM c JOIN users u ON u.id = c.author_id
            "#
        );

        sqlx::query_as::<_, Comment>(&sql)
            .bind(new_comment.post_id)
            .bind(new_comment.author_id)
            .bind(&new_comment.text)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                // The post can be deleted between the service's lookup and this insert.
                if is_foreign_key_violation(&e) {
                    AppError::not_found("Post not found", json!({"id": new_comment.post_id}))
                } else {
                    e.into()
                }
            })
    }

    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let sql = format!(
            r#"
            SELECT {COMMENT_PROJECTION}
            FROM comments c JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.id
            "#
        );

        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(post_id)
            .fetch_all(self.pool.as_ref())
            .await?)
    }

    async fn find(&self, post_id: i64, id: i64) -> Result<Option<Comment>, AppError> {
        let sql = format!(
            r#"
            SELECT {COMMENT_PROJECTION}
            FROM comments c JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1 AND c.id = $2
            "#
        );

        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(post_id)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?)
    }

    async fn update_text(
        &self,
        post_id: i64,
        id: i64,
        text: String,
    ) -> Result<Comment, AppError> {
        let sql = format!(
            r#"
            WITH c AS (
                UPDATE comments SET text = $3
                WHERE post_id = $1 AND id = $2
                RETURNING *
            )
            SELECT {COMMENT_PROJECTION}
            FROM c JOIN users u ON u.id = c.author_id
            "#
        );

        sqlx::query_as::<_, Comment>(&sql)
            .bind(post_id)
            .bind(id)
            .bind(text)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| {
                AppError::not_found("Comment not found", json!({"post_id": post_id, "id": id}))
            })
    }

    async fn delete(&self, post_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE post_id = $1 AND id = $2")
            .bind(post_id)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
