//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`, and `mockall` generates mocks for
//! service unit tests.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts and profiles
//! - [`GroupRepository`] - Post groups
//! - [`PostRepository`] - Post CRUD with paging
//! - [`CommentRepository`] - Comments scoped to a post
//! - [`FollowRepository`] - Follow edges
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod comment_repository;
pub mod follow_repository;
pub mod group_repository;
pub mod post_repository;
pub mod user_repository;

pub use comment_repository::CommentRepository;
pub use follow_repository::FollowRepository;
pub use group_repository::GroupRepository;
pub use post_repository::{PageWindow, PostRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
