//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{domain::entities::User, error::AppError, state::AppState};

/// The authenticated caller, placed in request extensions by [`layer`].
///
/// As an extractor it answers 401 when the request is anonymous, so
/// handlers that need a user just take it as an argument.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Authentication credentials were not provided.",
                    json!({}),
                )
            })
    }
}

/// Resolves an optional Bearer access token to the calling user.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <access token>
/// ```
///
/// # Authentication Flow
///
/// 1. No `Authorization` header: continue anonymously
/// 2. Extract token from the header
/// 3. Decode it as an access JWT and load its active user
/// 4. Store [`CurrentUser`] in request extensions
///
/// # Errors
///
/// Returns `401 Unauthorized`, on any endpoint, if the header is present
/// but malformed, or the token is invalid, expired, a refresh token, or
/// belongs to a missing or inactive user.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let api = Router::new()
///     .route("/posts", get(list_posts_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !req.headers().contains_key(AUTHORIZATION) {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header must be 'Bearer <token>'"}),
            )
        })?;

    let user = st.auth_service.authenticate(&token).await?;
    parts.extensions.insert(CurrentUser(user));

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
