//! Posts and their update model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A published post joined with its author's username.
///
/// `image` is a path relative to the media root, e.g. `posts/<uuid>.png`.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author: String,
    pub group_id: Option<i64>,
    pub image: Option<String>,
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub text: String,
    pub author_id: i64,
    pub group_id: Option<i64>,
    pub image: Option<String>,
}

/// Partial update of a post.
///
/// Outer `None` leaves a field unchanged; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub text: Option<String>,
    pub group_id: Option<Option<i64>>,
    pub image: Option<Option<String>>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.group_id.is_none() && self.image.is_none()
    }
}
