//! Comments on posts.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A comment joined with its author's username.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Input data for creating a comment. Author and post are always supplied by
/// the server, never by the client.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub author_id: i64,
    pub text: String,
}
