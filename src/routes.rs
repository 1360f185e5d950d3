//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/v1/*`     - REST API (optional Bearer JWT)
//! - `/v1/jwt/*` - Token endpoints
//! - `/media/*`  - Uploaded images
//! - `GET /health` - Health check: DB and media storage
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter for token endpoints
//! - **Authentication** - Bearer JWT resolved to the current user
//! - **Body limit** - Upper bound on request body size
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the result must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState, max_body_bytes: usize) -> Router {
    let router = compose(state, true)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(tracing::layer());

    trim_trailing_slash(router)
}

/// Routes, authentication and path normalization without rate limiting.
///
/// Used by integration tests, which have no peer address to key limits on.
pub fn api_router(state: AppState) -> Router {
    trim_trailing_slash(compose(state, false))
}

/// `/v1/posts/` and `/v1/posts` reach the same route.
///
/// The path is rewritten before routing, so the normalizing service wraps
/// the whole router and is mounted as the fallback of an empty one.
fn trim_trailing_slash(router: Router) -> Router {
    Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(router))
}

fn compose(state: AppState, rate_limited: bool) -> Router {
    let mut resources = api::routes::resource_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let mut tokens = api::routes::token_routes();

    if rate_limited {
        resources = resources.layer(rate_limit::layer(rate_limit::RESOURCES));
        tokens = tokens.layer(rate_limit::layer(rate_limit::TOKENS));
    }

    let v1 = Router::new().merge(resources).merge(tokens);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", v1)
        .nest_service("/media", ServeDir::new(&state.media_root))
        .with_state(state)
}
