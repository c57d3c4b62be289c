//! CORS for browser storefronts calling `/api`.
//!
//! - Development: any origin, the same method set a default Express `cors()` answers with.
//! - Production: only origins listed in `CORS_ALLOWED_ORIGINS` (exact match). An empty list
//!   means no cross-origin caller gets `Access-Control-Allow-Origin`.
//! - Never with credentials: tokens travel in `Authorization`, not cookies.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return AllowOrigin::any();
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    if origins.is_empty() {
        tracing::warn!("production CORS allowlist is empty; cross-origin requests get no CORS headers");
    }

    AllowOrigin::list(origins)
}

pub fn apply(router: Router, config: &Config) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id.clone(),
        ])
        // Let browser clients read the id to quote it in bug reports.
        .expose_headers([request_id])
        .max_age(PREFLIGHT_MAX_AGE);

    router.layer(cors)
}
