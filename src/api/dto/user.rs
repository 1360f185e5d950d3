//! DTOs for public user profiles.

use serde::Serialize;

use crate::domain::entities::UserProfile;

/// Public view of an account.
///
/// `posts` holds the texts of the user's posts; `following` holds the IDs of
/// follow records in which this user is the one being followed.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub posts: Vec<String>,
    pub following: Vec<i64>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            posts: profile.posts,
            following: profile.following,
        }
    }
}
