//! DTOs for the JWT endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /v1/jwt/create/`.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenCreateRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Request body for `POST /v1/jwt/refresh/`.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRefreshRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub refresh: String,
}

/// Request body for `POST /v1/jwt/verify/`.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenVerifyRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// Empty JSON object returned by a successful verify.
#[derive(Debug, Serialize)]
pub struct TokenVerifyResponse {}
