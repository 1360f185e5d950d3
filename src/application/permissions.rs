//! Authorization rules.
//!
//! Reads are open; authentication is enforced by the API layer before a
//! service is reached. What remains here is object-level: only the author
//! of a post or comment may change or delete it.

use crate::domain::entities::User;
use crate::error::AppError;
use serde_json::json;

pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to perform this action.";

/// Fails with [`AppError::Forbidden`] unless `user` authored the resource.
pub fn ensure_author(author_id: i64, user: &User) -> Result<(), AppError> {
    if author_id == user.id {
        return Ok(());
    }

    tracing::debug!(user_id = user.id, author_id, "Rejected write by non-author");
    Err(AppError::forbidden(
        PERMISSION_DENIED_MESSAGE,
        json!({"reason": "Only the author can modify this resource"}),
    ))
}
