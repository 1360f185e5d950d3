//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;
use serde_json::json;

const USER_COLUMNS: &str =
    "id, username, first_name, last_name, password_hash, is_active, date_joined";

const PROFILE_SELECT: &str = r#"
    SELECT u.id, u.username, u.first_name, u.last_name,
           ARRAY(SELECT p.text FROM posts p WHERE p.author_id = u.id ORDER BY p.id) AS posts,
           ARRAY(SELECT f.id FROM follows f WHERE f.following_id = u.id ORDER BY f.id) AS following
    FROM users u
"#;

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let sql = format!(
            r#"
            INSERT INTO users (username, first_name, last_name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.username)
            .bind(&new_user.first_name)
            .bind(&new_user.last_name)
            .bind(&new_user.password_hash)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on(&e, "users_username_key") {
                    AppError::conflict(
                        "A user with that username already exists.",
                        json!({"username": new_user.username}),
                    )
                } else {
                    e.into()
                }
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        Ok(sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(self.pool.as_ref())
            .await?)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");

        Ok(sqlx::query_as::<_, User>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?)
    }

    async fn set_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        let sql = format!("{PROFILE_SELECT} ORDER BY u.id");

        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?)
    }

    async fn find_profile(&self, id: i64) -> Result<Option<UserProfile>, AppError> {
        let sql = format!("{PROFILE_SELECT} WHERE u.id = $1");

        Ok(sqlx::query_as::<_, UserProfile>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?)
    }
}
