//! Repository trait for comments.

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comments.
///
/// Every lookup is scoped to a parent post: a comment is only found through
/// the post it belongs to.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Lists the comments of one post ordered by ID.
    async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Finds comment `id` if it belongs to `post_id`.
    async fn find(&self, post_id: i64, id: i64) -> Result<Option<Comment>, AppError>;

    /// Replaces the comment text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist on this post.
    async fn update_text(&self, post_id: i64, id: i64, text: String)
    -> Result<Comment, AppError>;

    /// Returns `false` if nothing was deleted.
    async fn delete(&self, post_id: i64, id: i64) -> Result<bool, AppError>;
}
