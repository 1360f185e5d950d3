//! Repository trait for posts.

use crate::domain::entities::{NewPost, Post, PostChanges};
use crate::error::AppError;
use async_trait::async_trait;

/// Window over the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

/// Repository interface for posts.
///
/// Returned posts always carry the author's username.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a post; `pub_date` is assigned by the database.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists posts ordered by ID; `None` returns every post.
    async fn list(&self, window: Option<PageWindow>) -> Result<Vec<Post>, AppError>;

    /// Counts all posts.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update and returns the updated post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Post, AppError>;

    /// Deletes a post and, through cascading, its comments.
    ///
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
