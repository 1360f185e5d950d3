//! Media store trait and error types.

use async_trait::async_trait;

use crate::utils::image_upload::ImageUpload;

/// Errors that can occur during media operations.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Media I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid media path: {0}")]
    InvalidPath(String),
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Trait for persisting uploaded images.
///
/// Stored files are addressed by a path relative to the store root
/// (`posts/<uuid>.png`); the API layer turns that into a public URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::media::FsMediaStore`] - Local filesystem
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Writes the image under `folder` with a fresh unique name.
    ///
    /// Returns the relative path of the stored file.
    async fn save(&self, folder: &str, upload: ImageUpload) -> MediaResult<String>;

    /// Removes a stored file. Missing files are not an error.
    async fn delete(&self, path: &str) -> MediaResult<()>;

    /// Checks that the store is writable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
