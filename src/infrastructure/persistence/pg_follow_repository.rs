//! PostgreSQL implementation of follow repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DUPLICATE_FOLLOW_MESSAGE, Follow, SELF_FOLLOW_MESSAGE};
use crate::domain::repositories::FollowRepository;
use crate::error::AppError;
use crate::utils::db_error::{
    is_check_violation_on, is_foreign_key_violation, is_unique_violation_on,
};
use serde_json::json;

const FOLLOW_PROJECTION: &str = "f.id, f.user_id, fu.username AS \"user\", f.following_id, ft.username AS following";

/// PostgreSQL repository for follow edges.
///
/// Uniqueness of `(user_id, following_id)` and the no-self-follow rule are
/// also enforced by table constraints; their violations map to the same
/// validation errors the service raises.
pub struct PgFollowRepository {
    pool: Arc<PgPool>,
}

impl PgFollowRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Escapes `LIKE` metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    async fn create(&self, user_id: i64, following_id: i64) -> Result<Follow, AppError> {
        let sql = format!(
            r#"
            WITH f AS (
                INSERT INTO follows (user_id, following_id)
                VALUES ($1, $2)
                RETURNING *
            )
            SELECT {FOLLOW_PROJECTION}
            FROM f
            JOIN users fu ON fu.id = f.user_id
            JOIN users ft ON ft.id = f.following_id
            "#
        );

        sqlx::query_as::<_, Follow>(&sql)
            .bind(user_id)
            .bind(following_id)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on(&e, "follows_user_following_key") {
                    AppError::field("non_field_errors", DUPLICATE_FOLLOW_MESSAGE)
                } else if is_check_violation_on(&e, "follows_no_self_follow") {
                    AppError::field("following", SELF_FOLLOW_MESSAGE)
                } else if is_foreign_key_violation(&e) {
                    AppError::not_found("User not found", json!({"id": following_id}))
                } else {
                    e.into()
                }
            })
    }

    async fn exists(&self, user_id: i64, following_id: i64) -> Result<bool, AppError> {
        Ok(sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND following_id = $2)",
        )
        .bind(user_id)
        .bind(following_id)
        .fetch_one(self.pool.as_ref())
        .await?)
    }

    async fn list_for_user(
        &self,
        user_id: i64,
        search: Option<String>,
    ) -> Result<Vec<Follow>, AppError> {
        let pattern = search.map(|term| format!("%{}%", escape_like(&term)));

        let sql = format!(
            r#"
            SELECT {FOLLOW_PROJECTION}
            FROM follows f
            JOIN users fu ON fu.id = f.user_id
            JOIN users ft ON ft.id = f.following_id
            WHERE f.user_id = $1
              AND ($2::TEXT IS NULL OR ft.username ILIKE $2 ESCAPE '\')
            ORDER BY f.id
            "#
        );

        Ok(sqlx::query_as::<_, Follow>(&sql)
            .bind(user_id)
            .bind(pattern)
            .fetch_all(self.pool.as_ref())
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
