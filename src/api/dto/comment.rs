//! DTOs for comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Comment;

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
    pub post: i64,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author,
            text: comment.text,
            created: comment.created,
            post: comment.post_id,
        }
    }
}

/// Request body for creating or editing a comment. `author` and `post` are
/// taken from the request, not the body.
#[derive(Debug, Default, Deserialize)]
pub struct CommentPayload {
    #[serde(default)]
    pub text: Option<String>,
}
