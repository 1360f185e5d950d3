//! Handlers for JWT issuance, refresh and verification.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{
    AccessTokenResponse, TokenCreateRequest, TokenPairResponse, TokenRefreshRequest,
    TokenVerifyRequest, TokenVerifyResponse,
};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /v1/jwt/create/`
///
/// # Request Body
///
/// ```json
/// { "username": "leo", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "access": "eyJ...", "refresh": "eyJ..." }
/// ```
///
/// # Errors
///
/// - 400 if a field is missing or blank
/// - 401 if the credentials are wrong or the account is inactive
pub async fn create_token_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TokenCreateRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    payload.validate()?;

    let pair = state
        .auth_service
        .obtain_pair(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenPairResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}

/// Issues a new access token from a refresh token.
///
/// # Endpoint
///
/// `POST /v1/jwt/refresh/`
///
/// # Errors
///
/// Returns 401 if the token is invalid, expired or an access token.
pub async fn refresh_token_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TokenRefreshRequest>,
) -> Result<Json<AccessTokenResponse>, AppError> {
    payload.validate()?;

    let access = state.auth_service.refresh(&payload.refresh).await?;

    Ok(Json(AccessTokenResponse { access }))
}

/// Checks a token of either kind.
///
/// # Endpoint
///
/// `POST /v1/jwt/verify/`
///
/// Answers `{}` for a valid token, 401 otherwise.
pub async fn verify_token_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TokenVerifyRequest>,
) -> Result<Json<TokenVerifyResponse>, AppError> {
    payload.validate()?;

    state.auth_service.verify(&payload.token)?;

    Ok(Json(TokenVerifyResponse {}))
}
