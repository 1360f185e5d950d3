//! User accounts.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account.
///
/// `password_hash` holds an Argon2 PHC string and never leaves the service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

/// Input data for creating a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Read-only projection of a user with their content.
///
/// `following` lists ids of follow records in which this user is the
/// followed party.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub posts: Vec<String>,
    pub following: Vec<i64>,
}
