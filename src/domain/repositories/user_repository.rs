//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User, UserProfile};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// Users are created by the admin CLI; the HTTP API only reads them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by ID.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    async fn set_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AppError>;

    /// Lists user profiles (post texts and incoming follow ids) ordered by ID.
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError>;

    /// Finds a single user profile.
    async fn find_profile(&self, id: i64) -> Result<Option<UserProfile>, AppError>;
}
