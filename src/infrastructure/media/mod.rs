//! Storage for uploaded post images.
//!
//! Provides a [`MediaStore`] trait with a filesystem implementation,
//! [`FsMediaStore`], whose root directory is served at `/media`.

mod fs_store;
mod service;

pub use fs_store::FsMediaStore;
pub use service::{MediaError, MediaResult, MediaStore};

#[cfg(test)]
pub use service::MockMediaStore;
