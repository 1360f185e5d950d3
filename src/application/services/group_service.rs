//! Group service. Groups are read-only over HTTP and created by administrators.

use std::sync::Arc;

use serde_json::json;

use crate::application::validation::check_text;
use crate::domain::entities::{Group, NewGroup};
use crate::domain::repositories::GroupRepository;
use crate::error::AppError;

pub struct GroupService<R: GroupRepository> {
    repository: Arc<R>,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Group>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a group by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the group does not exist.
    pub async fn get(&self, id: i64) -> Result<Group, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Group not found", json!({"id": id})))
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank or longer than
    /// 200 characters, or the slug is not URL-safe.
    /// Returns [`AppError::Conflict`] if the slug is taken.
    pub async fn create(&self, new_group: NewGroup) -> Result<Group, AppError> {
        let title = check_text("title", Some(new_group.title), true)?.unwrap_or_default();
        if title.chars().count() > 200 {
            return Err(AppError::field(
                "title",
                "Ensure this field has no more than 200 characters.",
            ));
        }

        if !NewGroup::is_valid_slug(&new_group.slug) {
            return Err(AppError::field(
                "slug",
                "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
            ));
        }

        let group = self
            .repository
            .create(NewGroup {
                title,
                slug: new_group.slug,
                description: new_group.description,
            })
            .await?;

        tracing::info!(group_id = group.id, slug = %group.slug, "Group created");
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGroupRepository;

    fn new_group(title: &str, slug: &str) -> NewGroup {
        NewGroup {
            title: title.to_string(),
            slug: slug.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_group() {
        let mut repo = MockGroupRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = GroupService::new(Arc::new(repo));

        let err = service.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_group() {
        let mut repo = MockGroupRepository::new();
        repo.expect_create()
            .withf(|g| g.slug == "cats" && g.title == "Cats")
            .times(1)
            .returning(|g| {
                Ok(Group {
                    id: 1,
                    title: g.title,
                    slug: g.slug,
                    description: g.description,
                })
            });

        let service = GroupService::new(Arc::new(repo));

        let group = service.create(new_group("Cats", "cats")).await.unwrap();
        assert_eq!(group.id, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_slug() {
        let mut repo = MockGroupRepository::new();
        repo.expect_create().never();

        let service = GroupService::new(Arc::new(repo));

        let err = service
            .create(new_group("Cats", "big cats"))
            .await
            .unwrap_err();

        assert!(err.to_error_info().details.get("slug").is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let service = GroupService::new(Arc::new(MockGroupRepository::new()));

        let err = service.create(new_group(" ", "cats")).await.unwrap_err();
        assert!(err.to_error_info().details.get("title").is_some());
    }
}
