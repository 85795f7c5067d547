// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

// Contact-form submissions are the only anonymous write; keep them to a
// trickle per client address.
const LEADS_PER_SECOND: u64 = 2;
const LEADS_BURST: u32 = 5;

pub fn lead_rate_limit_layer() -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    static RATE_LIMITER: OnceLock<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> =
        OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(LEADS_PER_SECOND);
            builder.burst_size(LEADS_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
