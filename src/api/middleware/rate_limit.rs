//! Rate limiting middleware using token bucket algorithm.
//!
//! Limits are keyed by the peer socket address, so the router must be served
//! with `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for public endpoints (count API, view beacon, admin pages).
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> RateLimitLayer {
    build(2, 100)
}

/// Stricter rate limiter for credential submission.
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Applied to `POST /admin/login` to slow down token guessing.
pub fn secure_layer() -> RateLimitLayer {
    build(1, 10)
}

fn build(per_second: u64, burst_size: u32) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
