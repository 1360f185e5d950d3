//! Core domain entities representing the blogging data model.
//!
//! Entities are plain data structures mapped from database rows. Creation and
//! update inputs live in separate structs:
//!
//! - [`User`] / [`NewUser`] - Accounts that author posts and comments
//! - [`Group`] / [`NewGroup`] - Categories posts can belong to
//! - [`Post`] / [`NewPost`] / [`PostChanges`] - Authored text entries with an optional image
//! - [`Comment`] / [`NewComment`] - Replies attached to a post
//! - [`Follow`] - Directed follower → followed edge

pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment};
pub use follow::{DUPLICATE_FOLLOW_MESSAGE, Follow, SELF_FOLLOW_MESSAGE};
pub use group::{Group, NewGroup};
pub use post::{NewPost, Post, PostChanges};
pub use user::{NewUser, User, UserProfile};
