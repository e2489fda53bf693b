use crate::{
    api::{activity, notifications, records},
    auth::middleware::auth_middleware,
    config::Config,
    source::RecordSource,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use anyhow::Context;

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter for the protected scope. Built once so every worker
/// shares the same bucket.
pub fn protected_rate_limit(requests_per_min: u32) -> anyhow::Result<RateLimit> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(requests_per_min)).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limit settings")
}

pub fn configure<S: RecordSource>(cfg: &mut web::ServiceConfig, config: &Config, limiter: &RateLimit) {
    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware)) // authentication
            .wrap(Governor::new(limiter)) // rate limiting
            .service(
                web::resource("/notifications")
                    .route(web::get().to(notifications::list_notifications::<S>)),
            )
            .service(web::resource("/activity").route(web::get().to(activity::list_activity::<S>)))
            // /records/{kind}
            .service(
                web::resource("/records/{kind}").route(web::get().to(records::list_records::<S>)),
            ),
    );
}
