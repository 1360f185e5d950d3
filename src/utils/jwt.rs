//! JWT encoding and validation (HS256).
//!
//! Two token kinds share one signing key: short-lived access tokens that
//! authenticate API requests, and long-lived refresh tokens that can only be
//! exchanged for new access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a decimal string.
    pub sub: String,
    pub username: String,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    /// Parses `sub` back into a user ID.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("failed to sign token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("token is invalid or expired")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("expected {expected:?} token, got {actual:?}")]
    WrongKind {
        expected: TokenKind,
        actual: TokenKind,
    },
}

/// Signs and validates tokens with a shared secret.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues a token of the given kind for a user.
    pub fn issue(&self, kind: TokenKind, user_id: i64, username: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_type: kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key).map_err(JwtError::Encode)
    }

    /// Validates signature and expiry, returning the claims of any kind.
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(JwtError::Invalid)
    }

    /// Validates a token and requires it to be of `expected` kind.
    pub fn decode_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = self.decode(token)?;

        if claims.token_type != expected {
            return Err(JwtError::WrongKind {
                expected,
                actual: claims.token_type,
            });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> JwtCodec {
        JwtCodec::new("test-secret", Duration::minutes(5), Duration::days(1))
    }

    #[test]
    fn test_issue_and_decode_access() {
        let codec = codec();
        let token = codec.issue(TokenKind::Access, 42, "leo").unwrap();

        let claims = codec.decode_kind(&token, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id(), Some(42));
        assert_eq!(claims.username, "leo");
        assert_eq!(claims.token_type, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_is_not_access() {
        let codec = codec();
        let token = codec.issue(TokenKind::Refresh, 1, "leo").unwrap();

        assert!(codec.decode(&token).is_ok());
        assert!(matches!(
            codec.decode_kind(&token, TokenKind::Access),
            Err(JwtError::WrongKind { .. })
        ));
    }

    #[test]
    fn test_other_secret_is_rejected() {
        let token = codec().issue(TokenKind::Access, 1, "leo").unwrap();
        let other = JwtCodec::new("other-secret", Duration::minutes(5), Duration::days(1));

        assert!(matches!(other.decode(&token), Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let codec = JwtCodec::new("test-secret", Duration::seconds(-10), Duration::days(1));
        let token = codec.issue(TokenKind::Access, 1, "leo").unwrap();

        assert!(codec.decode(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(codec().decode("not.a.jwt").is_err());
    }

    #[test]
    fn test_tokens_are_unique() {
        let codec = codec();
        let a = codec.issue(TokenKind::Access, 1, "leo").unwrap();
        let b = codec.issue(TokenKind::Access, 1, "leo").unwrap();

        assert_ne!(a, b);
    }
}
