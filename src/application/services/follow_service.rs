//! Follow relationship service.

use std::sync::Arc;

use serde_json::json;

use crate::application::validation::check_text;
use crate::domain::entities::{DUPLICATE_FOLLOW_MESSAGE, Follow, SELF_FOLLOW_MESSAGE, User};
use crate::domain::repositories::{FollowRepository, UserRepository};
use crate::error::AppError;

/// Service managing who follows whom.
///
/// A follow always belongs to the requesting user; the only input is the
/// username being followed.
pub struct FollowService<F: FollowRepository, U: UserRepository> {
    follows: Arc<F>,
    users: Arc<U>,
}

impl<F: FollowRepository, U: UserRepository> FollowService<F, U> {
    pub fn new(follows: Arc<F>, users: Arc<U>) -> Self {
        Self { follows, users }
    }

    /// Lists the follows owned by `user`.
    ///
    /// A non-blank `search` keeps only follows whose followed username
    /// contains it, ignoring case.
    pub async fn list(&self, user: &User, search: Option<String>) -> Result<Vec<Follow>, AppError> {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.follows.list_for_user(user.id, search).await
    }

    /// Makes `user` follow the account named `following`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `following` is missing or blank,
    /// names `user` itself, or is already followed.
    /// Returns [`AppError::NotFound`] if no account has that username.
    pub async fn create(&self, user: &User, following: Option<String>) -> Result<Follow, AppError> {
        let username = check_text("following", following, true)?.unwrap_or_default();

        let target = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "User not found",
                    json!({"following": [format!("Object with username={} does not exist.", username)]}),
                )
            })?;

        if target.id == user.id {
            return Err(AppError::field("following", SELF_FOLLOW_MESSAGE));
        }

        if self.follows.exists(user.id, target.id).await? {
            return Err(AppError::field("non_field_errors", DUPLICATE_FOLLOW_MESSAGE));
        }

        let follow = self.follows.create(user.id, target.id).await?;
        tracing::info!(user_id = user.id, following_id = target.id, "Follow created");

        Ok(follow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockFollowRepository, MockUserRepository};
    use chrono::Utc;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            password_hash: String::new(),
            is_active: true,
            date_joined: Utc::now(),
        }
    }

    fn users_with(list: Vec<User>) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |name| Ok(list.iter().find(|u| u.username == name).cloned()));
        users
    }

    #[tokio::test]
    async fn test_create_follow() {
        let mut follows = MockFollowRepository::new();
        follows.expect_exists().returning(|_, _| Ok(false));
        follows
            .expect_create()
            .withf(|user_id, following_id| *user_id == 1 && *following_id == 2)
            .times(1)
            .returning(|user_id, following_id| {
                Ok(Follow {
                    id: 1,
                    user_id,
                    user: "ann".to_string(),
                    following_id,
                    following: "bob".to_string(),
                })
            });

        let service = FollowService::new(
            Arc::new(follows),
            Arc::new(users_with(vec![user(2, "bob")])),
        );

        let follow = service
            .create(&user(1, "ann"), Some("bob".to_string()))
            .await
            .unwrap();

        assert_eq!(follow.user, "ann");
        assert_eq!(follow.following, "bob");
    }

    #[tokio::test]
    async fn test_cannot_follow_self() {
        let mut follows = MockFollowRepository::new();
        follows.expect_create().never();

        let service = FollowService::new(
            Arc::new(follows),
            Arc::new(users_with(vec![user(1, "ann")])),
        );

        let err = service
            .create(&user(1, "ann"), Some("ann".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_error_info().details["following"][0], SELF_FOLLOW_MESSAGE);
    }

    #[tokio::test]
    async fn test_duplicate_follow() {
        let mut follows = MockFollowRepository::new();
        follows.expect_exists().returning(|_, _| Ok(true));
        follows.expect_create().never();

        let service = FollowService::new(
            Arc::new(follows),
            Arc::new(users_with(vec![user(2, "bob")])),
        );

        let err = service
            .create(&user(1, "ann"), Some("bob".to_string()))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_error_info().details["non_field_errors"][0],
            DUPLICATE_FOLLOW_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_follow_unknown_user() {
        let service = FollowService::new(
            Arc::new(MockFollowRepository::new()),
            Arc::new(users_with(vec![])),
        );

        let err = service
            .create(&user(1, "ann"), Some("ghost".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_follow_requires_username() {
        let service = FollowService::new(
            Arc::new(MockFollowRepository::new()),
            Arc::new(MockUserRepository::new()),
        );

        let err = service.create(&user(1, "ann"), None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_blank_search_is_ignored() {
        let mut follows = MockFollowRepository::new();
        follows
            .expect_list_for_user()
            .withf(|user_id, search| *user_id == 1 && search.is_none())
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = FollowService::new(Arc::new(follows), Arc::new(MockUserRepository::new()));

        let result = service.list(&user(1, "ann"), Some("  ".to_string())).await;
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_trimmed() {
        let mut follows = MockFollowRepository::new();
        follows
            .expect_list_for_user()
            .withf(|_, search| search.as_deref() == Some("bo"))
            .returning(|_, _| Ok(vec![]));

        let service = FollowService::new(Arc::new(follows), Arc::new(MockUserRepository::new()));

        assert!(service.list(&user(1, "ann"), Some(" bo ".to_string())).await.is_ok());
    }
}
