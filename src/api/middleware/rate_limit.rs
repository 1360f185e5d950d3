//! Per-client token-bucket rate limiting.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Refill rate and bucket size for one group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub per_second: u64,
    pub burst: u32,
}

/// Posts, comments, groups, follows and users.
pub const RESOURCES: Quota = Quota {
    per_second: 10,
    burst: 100,
};

/// `/v1/jwt/*`. Slows down password guessing.
pub const TOKENS: Quota = Quota {
    per_second: 1,
    burst: 10,
};

/// Builds a limiter keyed by the socket peer IP.
///
/// Requests over the quota get `429 Too Many Requests`. The router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>()`, or
/// every request fails key extraction.
///
/// ```rust,ignore
/// let tokens = api::routes::token_routes().layer(rate_limit::layer(rate_limit::TOKENS));
/// ```
pub fn layer(quota: Quota) -> RateLimitLayer {
    let config = GovernorConfigBuilder::default()
        .per_second(quota.per_second)
        .burst_size(quota.burst)
        .finish()
        .expect("rate limit quota is non-zero");

    GovernorLayer::new(Arc::new(config))
}
