//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! with field rules also derive `validator::Validate`.

pub mod auth;
pub mod comment;
pub mod follow;
pub mod group;
pub mod health;
pub mod pagination;
pub mod post;
pub mod user;
