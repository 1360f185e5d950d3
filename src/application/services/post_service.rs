//! Post management service.

use std::sync::Arc;

use serde_json::json;

use crate::application::permissions::ensure_author;
use crate::application::validation::check_text;
use crate::domain::entities::{NewPost, Post, PostChanges, User};
use crate::domain::repositories::{GroupRepository, PageWindow, PostRepository};
use crate::error::AppError;
use crate::infrastructure::media::MediaStore;
use crate::utils::image_upload::ImageUpload;

/// Folder under the media root that holds post images.
pub const POST_IMAGE_FOLDER: &str = "posts";

/// Decoded write payload for a post.
///
/// Outer `None` means the field was absent; `Some(None)` is an explicit null.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub text: Option<String>,
    pub group: Option<Option<i64>>,
    pub image: Option<Option<ImageUpload>>,
}

/// One page of posts with the total count.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: i64,
}

/// Service for creating, reading, updating and deleting posts.
///
/// - The author is always the requesting user
/// - Only the author may update or delete
/// - Images are stored through [`MediaStore`] and replaced files are removed
pub struct PostService<P: PostRepository, G: GroupRepository> {
    posts: Arc<P>,
    groups: Arc<G>,
    media: Arc<dyn MediaStore>,
}

impl<P: PostRepository, G: GroupRepository> PostService<P, G> {
    /// Creates a new post service.
    pub fn new(posts: Arc<P>, groups: Arc<G>, media: Arc<dyn MediaStore>) -> Self {
        Self {
            posts,
            groups,
            media,
        }
    }

    /// Lists every post ordered by ID.
    pub async fn list(&self) -> Result<Vec<Post>, AppError> {
        self.posts.list(None).await
    }

    /// Lists one window of posts together with the total count.
    pub async fn list_page(&self, window: PageWindow) -> Result<PostPage, AppError> {
        let (posts, total) = tokio::try_join!(self.posts.list(Some(window)), self.posts.count())?;

        Ok(PostPage { posts, total })
    }

    /// Retrieves a post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn get(&self, id: i64) -> Result<Post, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found", json!({"id": id})))
    }

    /// Retrieves a post that `user` is allowed to change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the author.
    pub async fn get_owned(&self, id: i64, user: &User) -> Result<Post, AppError> {
        let post = self.get(id).await?;
        ensure_author(post.author_id, user)?;
        Ok(post)
    }

    /// Creates a post authored by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `text` is missing or blank.
    /// Returns [`AppError::NotFound`] if the referenced group does not exist.
    pub async fn create(&self, author: &User, input: PostInput) -> Result<Post, AppError> {
        let text = check_text("text", input.text, true)?.unwrap_or_default();
        let group_id = input.group.flatten();
        self.ensure_group_exists(group_id).await?;

        let image = match input.image.flatten() {
            Some(upload) => Some(self.store_image(upload).await?),
            None => None,
        };

        let new_post = NewPost {
            text,
            author_id: author.id,
            group_id,
            image: image.clone(),
        };

        match self.posts.create(new_post).await {
            Ok(post) => {
                tracing::info!(post_id = post.id, author_id = author.id, "Post created");
                Ok(post)
            }
            Err(e) => {
                if let Some(path) = image {
                    self.discard_image(&path).await;
                }
                Err(e)
            }
        }
    }

    /// Updates a post owned by `user`.
    ///
    /// `partial = false` (PUT) requires `text`; `partial = true` (PATCH)
    /// changes only the fields present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post or referenced group does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the author.
    /// Returns [`AppError::Validation`] on invalid fields.
    pub async fn update(
        &self,
        id: i64,
        user: &User,
        input: PostInput,
        partial: bool,
    ) -> Result<Post, AppError> {
        let existing = self.get_owned(id, user).await?;

        let text = check_text("text", input.text, !partial)?;
        if let Some(group_id) = input.group {
            self.ensure_group_exists(group_id).await?;
        }

        let image = match input.image {
            Some(Some(upload)) => Some(Some(self.store_image(upload).await?)),
            Some(None) => Some(None),
            None => None,
        };
        let new_image_path = image.clone().flatten();

        let changes = PostChanges {
            text,
            group_id: input.group,
            image,
        };

        let updated = match self.posts.update(id, changes).await {
            Ok(post) => post,
            Err(e) => {
                if let Some(path) = new_image_path {
                    self.discard_image(&path).await;
                }
                return Err(e);
            }
        };

        if let Some(old) = existing.image
            && updated.image.as_deref() != Some(old.as_str())
        {
            self.discard_image(&old).await;
        }

        tracing::info!(post_id = id, partial, "Post updated");
        Ok(updated)
    }

    /// Deletes a post owned by `user`, together with its comments and image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Forbidden`] if `user` is not the author.
    pub async fn delete(&self, id: i64, user: &User) -> Result<(), AppError> {
        let existing = self.get_owned(id, user).await?;

        if !self.posts.delete(id).await? {
            return Err(AppError::not_found("Post not found", json!({"id": id})));
        }

        if let Some(path) = existing.image {
            self.discard_image(&path).await;
        }

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    async fn ensure_group_exists(&self, group_id: Option<i64>) -> Result<(), AppError> {
        let Some(group_id) = group_id else {
            return Ok(());
        };

        if self.groups.find_by_id(group_id).await?.is_none() {
            return Err(AppError::not_found(
                "Group not found",
                json!({"group": [format!("Invalid pk \"{}\" - object does not exist.", group_id)]}),
            ));
        }

        Ok(())
    }

    async fn store_image(&self, upload: ImageUpload) -> Result<String, AppError> {
        self.media
            .save(POST_IMAGE_FOLDER, upload)
            .await
            .map_err(|e| AppError::internal("Failed to store image", json!({"reason": e.to_string()})))
    }

    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.media.delete(path).await {
            tracing::warn!(error = %e, path, "Failed to delete media file");
        }
    }
}
