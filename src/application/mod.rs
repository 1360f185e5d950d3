//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - JWT issuance and request authentication
//! - [`services::post_service::PostService`] - Post CRUD with images and authorship checks
//! - [`services::comment_service::CommentService`] - Comments scoped to a post
//! - [`services::follow_service::FollowService`] - Follow listing and creation
//! - [`services::group_service::GroupService`] - Groups
//! - [`services::user_service::UserService`] - User accounts and profiles
//!
//! Cross-cutting rules live in [`permissions`] (authorship) and
//! [`validation`] (field checks shared by several services).

pub mod permissions;
pub mod services;
pub mod validation;
