//! Comment management service.
//!
//! Comments are always addressed through their post: a comment that exists
//! but belongs to a different post is reported as not found.

use std::sync::Arc;

use serde_json::json;

use crate::application::permissions::ensure_author;
use crate::application::validation::check_text;
use crate::domain::entities::{Comment, NewComment, User};
use crate::domain::repositories::{CommentRepository, PostRepository};
use crate::error::AppError;

pub struct CommentService<C: CommentRepository, P: PostRepository> {
    comments: Arc<C>,
    posts: Arc<P>,
}

fn comment_not_found(post_id: i64, id: i64) -> AppError {
    AppError::not_found(
        "Comment not found",
        json!({"post_id": post_id, "id": id}),
    )
}

impl<C: CommentRepository, P: PostRepository> CommentService<C, P> {
    pub fn new(comments: Arc<C>, posts: Arc<P>) -> Self {
        Self { comments, posts }
    }

    /// Lists the comments of a post ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    pub async fn list(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        self.ensure_post_exists(post_id).await?;
        self.comments.list_by_post(post_id).await
    }

    /// Retrieves one comment of a post.
    pub async fn get(&self, post_id: i64, id: i64) -> Result<Comment, AppError> {
        self.comments
            .find(post_id, id)
            .await?
            .ok_or_else(|| comment_not_found(post_id, id))
    }

    /// Retrieves a comment that `user` is allowed to change.
    pub async fn get_owned(&self, post_id: i64, id: i64, user: &User) -> Result<Comment, AppError> {
        let comment = self.get(post_id, id).await?;
        ensure_author(comment.author_id, user)?;
        Ok(comment)
    }

    /// Adds a comment to a post, authored by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post does not exist.
    /// Returns [`AppError::Validation`] if `text` is missing or blank.
    pub async fn create(
        &self,
        post_id: i64,
        author: &User,
        text: Option<String>,
    ) -> Result<Comment, AppError> {
        self.ensure_post_exists(post_id).await?;
        let text = check_text("text", text, true)?.unwrap_or_default();

        let comment = self
            .comments
            .create(NewComment {
                post_id,
                author_id: author.id,
                text,
            })
            .await?;

        tracing::info!(comment_id = comment.id, post_id, author_id = author.id, "Comment created");
        Ok(comment)
    }

    /// Edits a comment owned by `user`.
    ///
    /// Only `text` is writable, so a partial update without it leaves the
    /// comment unchanged.
    pub async fn update(
        &self,
        post_id: i64,
        id: i64,
        user: &User,
        text: Option<String>,
        partial: bool,
    ) -> Result<Comment, AppError> {
        let existing = self.get_owned(post_id, id, user).await?;

        match check_text("text", text, !partial)? {
            Some(text) => {
                let updated = self.comments.update_text(post_id, id, text).await?;
                tracing::info!(comment_id = id, post_id, "Comment updated");
                Ok(updated)
            }
            None => Ok(existing),
        }
    }

    /// Deletes a comment owned by `user`.
    pub async fn delete(&self, post_id: i64, id: i64, user: &User) -> Result<(), AppError> {
        self.get_owned(post_id, id, user).await?;

        if !self.comments.delete(post_id, id).await? {
            return Err(comment_not_found(post_id, id));
        }

        tracing::info!(comment_id = id, post_id, "Comment deleted");
        Ok(())
    }

    /// Fails with [`AppError::NotFound`] unless the post exists.
    pub async fn ensure_post_exists(&self, post_id: i64) -> Result<(), AppError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(
                "Post not found",
                json!({"id": post_id}),
            )),
        }
    }
}
