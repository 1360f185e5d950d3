//! Repository trait for follow relationships.

use crate::domain::entities::Follow;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for follow edges.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFollowRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Inserts a `user_id → following_id` edge.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the pair already exists or the
    /// edge is a self-follow (storage-level constraints).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, following_id: i64) -> Result<Follow, AppError>;

    /// Checks whether `user_id` already follows `following_id`.
    async fn exists(&self, user_id: i64, following_id: i64) -> Result<bool, AppError>;

    /// Lists outgoing follows of `user_id` ordered by ID.
    ///
    /// With `search`, keeps only follows whose followed username contains the
    /// term (case-insensitive).
    async fn list_for_user(
        &self,
        user_id: i64,
        search: Option<String>,
    ) -> Result<Vec<Follow>, AppError>;
}
