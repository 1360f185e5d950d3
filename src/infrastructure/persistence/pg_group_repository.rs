//! PostgreSQL implementation of group repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Group, NewGroup};
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;
use serde_json::json;

/// PostgreSQL repository for groups.
pub struct PgGroupRepository {
    pool: Arc<PgPool>,
}

impl PgGroupRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn create(&self, new_group: NewGroup) -> Result<Group, AppError> {
        sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (title, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, slug, description
            "#,
        )
        .bind(&new_group.title)
        .bind(&new_group.slug)
        .bind(&new_group.description)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, "groups_slug_key") {
                AppError::conflict(
                    "A group with that slug already exists.",
                    json!({"slug": new_group.slug}),
                )
            } else {
                e.into()
            }
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, AppError> {
        Ok(sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description FROM groups WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?)
    }

    async fn list(&self) -> Result<Vec<Group>, AppError> {
        Ok(sqlx::query_as::<_, Group>(
            "SELECT id, title, slug, description FROM groups ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?)
    }
}
