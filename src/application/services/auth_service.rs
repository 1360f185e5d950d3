//! Authentication service: JWT issuance and bearer token validation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::{JwtCodec, JwtError, TokenKind};
use crate::utils::password::verify_password;

/// Access/refresh pair returned on login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Service for issuing JWTs and resolving them back to users.
///
/// Only access tokens authenticate API requests. Refresh tokens can only be
/// exchanged for a new access token. Every token is re-checked against the
/// database, so deactivating a user revokes their tokens.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    codec: JwtCodec,
}

fn invalid_token(e: JwtError) -> AppError {
    tracing::debug!(error = %e, "Rejected token");
    AppError::unauthorized(
        "Given token not valid for any token type",
        json!({"reason": e.to_string()}),
    )
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>, codec: JwtCodec) -> Self {
        Self { repository, codec }
    }

    /// Exchanges credentials for a token pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user does not exist, is
    /// inactive, or the password does not match. The three cases share one
    /// message.
    pub async fn obtain_pair(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let no_account = || {
            AppError::unauthorized(
                "No active account found with the given credentials",
                json!({}),
            )
        };

        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(no_account)?;

        if !user.is_active || !verify_password(password, &user.password_hash) {
            return Err(no_account());
        }

        tracing::info!(user_id = user.id, "Issued token pair");
        self.issue_pair(&user)
    }

    /// Issues a token pair for an already-authenticated user.
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let sign = |kind| {
            self.codec
                .issue(kind, user.id, &user.username)
                .map_err(|e| AppError::internal("Failed to sign token", json!({"reason": e.to_string()})))
        };

        Ok(TokenPair {
            access: sign(TokenKind::Access)?,
            refresh: sign(TokenKind::Refresh)?,
        })
    }

    /// Issues a new access token from a refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired,
    /// not a refresh token, or its user is gone or inactive.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self
            .codec
            .decode_kind(refresh_token, TokenKind::Refresh)
            .map_err(invalid_token)?;

        let user = self.load_active_user(claims.user_id()).await?;

        self.codec
            .issue(TokenKind::Access, user.id, &user.username)
            .map_err(|e| AppError::internal("Failed to sign token", json!({"reason": e.to_string()})))
    }

    /// Checks that a token of either kind is well-formed and unexpired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] otherwise.
    pub fn verify(&self, token: &str) -> Result<(), AppError> {
        self.codec.decode(token).map(|_| ()).map_err(invalid_token)
    }

    /// Resolves an access token to its active user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired,
    /// a refresh token, or its user is gone or inactive.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self
            .codec
            .decode_kind(token, TokenKind::Access)
            .map_err(invalid_token)?;

        self.load_active_user(claims.user_id()).await
    }

    async fn load_active_user(&self, user_id: Option<i64>) -> Result<User, AppError> {
        let not_found = || AppError::unauthorized("User not found", json!({}));

        let user_id = user_id.ok_or_else(not_found)?;
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)?;

        if !user.is_active {
            return Err(AppError::unauthorized("User is inactive", json!({})));
        }

        Ok(user)
    }
}
