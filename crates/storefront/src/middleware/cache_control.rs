//! Cache-Control for CDN revalidation.
//!
//! Successful page responses may be served by a shared cache for the
//! revalidation interval and refreshed in the background afterwards.
//! Browsers always revalidate. Form posts, errors and health checks are
//! never cached. Cached pages vary on `HX-Request`, since the same URL can
//! answer with the full page or only a fragment.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue, Method,
        header::{CACHE_CONTROL, VARY},
    },
    middleware::Next,
    response::Response,
};

use crate::routes::HX_REQUEST_HEADER;
use crate::state::AppState;

const NO_STORE: &str = "no-store, max-age=0";
const STATIC_ASSETS: &str = "public, max-age=86400";

/// Header value for cacheable pages.
#[must_use]
pub fn page_cache_control(revalidate: Duration) -> String {
    format!(
        "public, max-age=0, s-maxage={}, stale-while-revalidate",
        revalidate.as_secs()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    NoStore,
    StaticAsset,
    Page(Duration),
}

impl Policy {
    fn header_value(self) -> String {
        match self {
            Self::NoStore => NO_STORE.to_string(),
            Self::StaticAsset => STATIC_ASSETS.to_string(),
            Self::Page(revalidate) => page_cache_control(revalidate),
        }
    }
}

fn policy_for(method: &Method, path: &str, success: bool, revalidate: Duration) -> Policy {
    let cacheable = success && (method == Method::GET || method == Method::HEAD);
    if !cacheable || path.starts_with("/health") || revalidate.is_zero() {
        Policy::NoStore
    } else if path.starts_with("/static/") {
        Policy::StaticAsset
    } else {
        Policy::Page(revalidate)
    }
}

/// Set `Cache-Control` unless the handler already did.
pub async fn cache_control_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if response.headers().contains_key(CACHE_CONTROL) {
        return response;
    }

    let policy = policy_for(
        &method,
        &path,
        response.status().is_success(),
        state.config().revalidate,
    );
    if matches!(policy, Policy::Page(_)) {
        response
            .headers_mut()
            .append(VARY, HeaderValue::from_static(HX_REQUEST_HEADER));
    }
    if let Ok(value) = HeaderValue::from_str(&policy.header_value()) {
        response.headers_mut().insert(CACHE_CONTROL, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_pages_revalidate() {
        let policy = policy_for(&Method::GET, "/about", true, HOUR);
        assert_eq!(policy, Policy::Page(HOUR));
        assert_eq!(
            policy.header_value(),
            "public, max-age=0, s-maxage=3600, stale-while-revalidate"
        );
    }

    #[test]
    fn test_uncacheable_responses() {
        assert_eq!(policy_for(&Method::POST, "/contact", true, HOUR), Policy::NoStore);
        assert_eq!(policy_for(&Method::GET, "/products/x", false, HOUR), Policy::NoStore);
        assert_eq!(policy_for(&Method::GET, "/health", true, HOUR), Policy::NoStore);
        assert_eq!(policy_for(&Method::GET, "/", true, Duration::ZERO), Policy::NoStore);
    }

    #[test]
    fn test_static_assets() {
        assert_eq!(
            policy_for(&Method::GET, "/static/css/main.css", true, HOUR),
            Policy::StaticAsset
        );
    }
}
