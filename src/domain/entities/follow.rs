//! Follow relationships.

use sqlx::FromRow;

/// `user` follows `following`. Both are usernames resolved from the user ids.
///
/// A `(user, following)` pair is unique and a user never follows themselves.
#[derive(Debug, Clone, FromRow)]
pub struct Follow {
    pub id: i64,
    pub user_id: i64,
    pub user: String,
    pub following_id: i64,
    pub following: String,
}

/// Message returned when a user tries to follow themselves.
pub const SELF_FOLLOW_MESSAGE: &str = "You cannot follow yourself.";

/// Message returned when a `(user, following)` pair already exists.
pub const DUPLICATE_FOLLOW_MESSAGE: &str = "The fields user, following must make a unique set.";
