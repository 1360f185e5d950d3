//! Business logic services for the application layer.

pub mod auth_service;
pub mod comment_service;
pub mod follow_service;
pub mod group_service;
pub mod post_service;
pub mod user_service;

pub use auth_service::{AuthService, TokenPair};
pub use comment_service::CommentService;
pub use follow_service::FollowService;
pub use group_service::GroupService;
pub use post_service::{POST_IMAGE_FOLDER, PostInput, PostPage, PostService};
pub use user_service::{UserInput, UserService};
