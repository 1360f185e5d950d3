//! User account service: public profiles and administrative account management.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::json;

use crate::domain::entities::{NewUser, User, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]{1,150}$").expect("username regex is valid"));

/// Checks that `username` has 1 to 150 letters, digits or `@ . + - _`.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME.is_match(username)
}

/// Input for creating an account.
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        self.repository.list_profiles().await
    }

    /// Retrieves a public profile by user ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_profile(&self, id: i64) -> Result<UserProfile, AppError> {
        self.repository
            .find_profile(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Creates an account with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on an invalid username or empty password.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub async fn create(&self, input: UserInput) -> Result<User, AppError> {
        if !is_valid_username(&input.username) {
            return Err(AppError::field(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            ));
        }
        if input.password.is_empty() {
            return Err(AppError::field("password", "This field may not be blank."));
        }

        let user = self
            .repository
            .create(NewUser {
                username: input.username,
                first_name: input.first_name,
                last_name: input.last_name,
                password_hash: hash_password(&input.password)?,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Replaces the password of the named user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn set_password(&self, username: &str, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::field("password", "This field may not be blank."));
        }

        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"username": username})))?;

        self.repository
            .set_password_hash(user.id, &hash_password(password)?)
            .await?;

        tracing::info!(user_id = user.id, "Password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;
    use chrono::Utc;

    use crate::domain::repositories::MockUserRepository;

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("leo.tolstoy+1@x"));
        assert!(is_valid_username("anna_k"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("with space"));
        assert!(!is_valid_username(&"a".repeat(151)));
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|u| u.username == "leo" && verify_password("secret", &u.password_hash))
            .times(1)
            .returning(|u| {
                Ok(User {
                    id: 1,
                    username: u.username,
                    first_name: u.first_name,
                    last_name: u.last_name,
                    password_hash: u.password_hash,
                    is_active: true,
                    date_joined: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(repo));

        let user = service
            .create(UserInput {
                username: "leo".to_string(),
                password: "secret".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_ne!(user.password_hash, "secret");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserService::new(Arc::new(repo));

        let err = service
            .create(UserInput {
                username: "bad name".to_string(),
                password: "secret".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_profile_missing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_profile().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo));

        assert!(matches!(
            service.get_profile(9).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_set_password_unknown_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_set_password_hash().never();

        let service = UserService::new(Arc::new(repo));

        assert!(service.set_password("ghost", "pw").await.is_err());
    }
}
