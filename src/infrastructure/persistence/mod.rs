//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users and profiles
//! - [`PgGroupRepository`] - Groups
//! - [`PgPostRepository`] - Posts
//! - [`PgCommentRepository`] - Comments
//! - [`PgFollowRepository`] - Follow edges

pub mod pg_comment_repository;
pub mod pg_follow_repository;
pub mod pg_group_repository;
pub mod pg_post_repository;
pub mod pg_user_repository;

pub use pg_comment_repository::PgCommentRepository;
pub use pg_follow_repository::PgFollowRepository;
pub use pg_group_repository::PgGroupRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_user_repository::PgUserRepository;
