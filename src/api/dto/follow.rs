//! DTOs for follow relationships.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Follow;

#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub id: i64,
    pub user: String,
    pub following: String,
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        Self {
            id: follow.id,
            user: follow.user,
            following: follow.following,
        }
    }
}

/// Request body for `POST /v1/follow/`: the username to follow.
#[derive(Debug, Default, Deserialize)]
pub struct FollowPayload {
    #[serde(default)]
    pub following: Option<String>,
}

/// Query parameters for `GET /v1/follow/`.
#[derive(Debug, Default, Deserialize)]
pub struct FollowQuery {
    pub search: Option<String>,
}
