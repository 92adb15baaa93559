//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - Brand story
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (content store reachable)
//!
//! # Catalog
//! GET  /collections            - Collection lookbook
//! GET  /collections/{slug}     - Collection detail
//! GET  /new-arrivals           - New arrivals (?category=&sort=, grid fragment on HX-Request)
//! GET  /products/{slug}        - Product detail (?color=&image=&lightbox=&tab=)
//!
//! # Stores & contact
//! GET  /stores                 - Store locator (?store=)
//! GET  /contact                - Contact page
//! POST /contact                - Contact form (fragment)
//! POST /newsletter             - Newsletter signup (fragment)
//! ```

pub mod about;
pub mod collections;
pub mod contact;
pub mod home;
pub mod new_arrivals;
pub mod newsletter;
pub mod products;
pub mod stores;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use sayura_core::SiteSettings;
use tracing::instrument;

use crate::content::defaults::LayoutContent;
use crate::error::AppError;
use crate::state::AppState;
use crate::views::LayoutView;

/// How long a form shows its thank-you state before the script resets it.
pub const SUBMITTED_DISPLAY_MS: u32 = 3000;

/// Header sent by the client script on fragment requests.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// Whether the request asked for a fragment instead of a full page.
#[must_use]
pub fn is_fragment_request(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Header and footer for a page, from the fetched site settings.
pub(crate) fn layout_view(state: &AppState, settings: Option<&SiteSettings>) -> LayoutView {
    LayoutView::new(&LayoutContent::merge(settings), state.images())
}

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{slug}", get(collections::show))
}

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/ready", get(readiness))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        .route("/about", get(about::about))
        // Catalog
        .nest("/collections", collection_routes())
        .route("/new-arrivals", get(new_arrivals::index))
        .route("/products/{slug}", get(products::show))
        // Stores & contact
        .route("/stores", get(stores::index))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/newsletter", post(newsletter::subscribe))
        .nest("/health", health_routes())
}

/// Fallback for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("route".to_string())
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}

/// Readiness check: the content store answers a settings query.
#[instrument(skip(state))]
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match state.content().site_settings().await {
        Ok(_) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "not ready")
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_fragment_request_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_fragment_request(&headers));

        headers.insert(HX_REQUEST_HEADER, HeaderValue::from_static("true"));
        assert!(is_fragment_request(&headers));

        headers.insert(HX_REQUEST_HEADER, HeaderValue::from_static("false"));
        assert!(!is_fragment_request(&headers));
    }
}
