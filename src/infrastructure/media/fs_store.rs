//! Filesystem-backed media store.

use super::service::{MediaError, MediaResult, MediaStore};
use crate::utils::image_upload::ImageUpload;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Stores files below a root directory.
///
/// The root is created on demand, so a fresh deployment needs no setup.
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path inside the root, refusing anything that
    /// could escape it.
    fn resolve(&self, relative: &str) -> MediaResult<PathBuf> {
        let path = Path::new(relative);
        let safe = !relative.is_empty()
            && path
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !safe {
            return Err(MediaError::InvalidPath(relative.to_string()));
        }

        Ok(self.root.join(path))
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn save(&self, folder: &str, upload: ImageUpload) -> MediaResult<String> {
        let file_name = format!("{}.{}", Uuid::new_v4().simple(), upload.extension);
        let relative = format!("{}/{}", folder.trim_matches('/'), file_name);
        let full_path = self.resolve(&relative)?;

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full_path, &upload.bytes).await?;

        debug!(path = %relative, size = upload.bytes.len(), "Stored media file");
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> MediaResult<()> {
        let full_path = self.resolve(path)?;

        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path, "Deleted media file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> bool {
        if tokio::fs::create_dir_all(&self.root).await.is_err() {
            return false;
        }

        tokio::fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir() && !meta.permissions().readonly())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FsMediaStore {
        FsMediaStore::new(std::env::temp_dir().join(format!("media-test-{}", Uuid::new_v4())))
    }

    fn upload() -> ImageUpload {
        ImageUpload {
            extension: "png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G', 1, 2, 3],
        }
    }

    #[tokio::test]
    async fn test_save_writes_bytes() {
        let store = temp_store();

        let path = store.save("posts", upload()).await.unwrap();

        assert!(path.starts_with("posts/"));
        assert!(path.ends_with(".png"));
        let written = tokio::fs::read(store.root().join(&path)).await.unwrap();
        assert_eq!(written, upload().bytes);

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_save_generates_unique_names() {
        let store = temp_store();

        let a = store.save("posts", upload()).await.unwrap();
        let b = store.save("posts", upload()).await.unwrap();

        assert_ne!(a, b);
        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let store = temp_store();
        assert!(store.delete("posts/missing.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let store = temp_store();
        let path = store.save("posts", upload()).await.unwrap();

        store.delete(&path).await.unwrap();

        assert!(!store.root().join(&path).exists());
        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_path_traversal_is_rejected() {
        let store = temp_store();

        assert!(matches!(
            store.delete("../etc/passwd").await,
            Err(MediaError::InvalidPath(_))
        ));
        assert!(matches!(
            store.delete("/etc/passwd").await,
            Err(MediaError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn test_health_check_creates_root() {
        let store = temp_store();

        assert!(store.health_check().await);
        assert!(store.root().is_dir());

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }
}
