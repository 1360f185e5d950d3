//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod auth;
pub mod comments;
pub mod follows;
pub mod groups;
pub mod health;
pub mod posts;
pub mod users;

pub use auth::{create_token_handler, refresh_token_handler, verify_token_handler};
pub use comments::{
    create_comment_handler, delete_comment_handler, get_comment_handler, list_comments_handler,
    patch_comment_handler, put_comment_handler,
};
pub use follows::{create_follow_handler, list_follows_handler};
pub use groups::{get_group_handler, list_groups_handler};
pub use health::health_handler;
pub use posts::{
    create_post_handler, delete_post_handler, get_post_handler, list_posts_handler,
    patch_post_handler, put_post_handler,
};
pub use users::{get_user_handler, list_users_handler};
