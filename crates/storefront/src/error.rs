//! Request errors and their responses.
//!
//! Handlers return [`Result`]. Content store and internal failures are
//! reported to Sentry and answered with a bare status line; a missing page
//! renders the not-found template.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::content::defaults::LayoutContent;
use crate::content::forms::SinkError;
use crate::filters;
use crate::sanity::{ImageUrlBuilder, SanityError};
use crate::views::LayoutView;

#[derive(Debug, Error)]
pub enum AppError {
    /// The content store could not answer; the page is not rendered at all.
    #[error("Sanity error: {0}")]
    Sanity(#[from] SanityError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Submission error: {0}")]
    Submission(#[from] SinkError),
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Sanity(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Not-found page.
///
/// Rendered with the compiled-in layout so a missing page never costs a
/// content store round trip.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: LayoutView,
    pub title: String,
    pub description: String,
}

impl NotFoundTemplate {
    #[must_use]
    pub fn new() -> Self {
        let layout = LayoutContent::merge(None);
        let view = LayoutView::new(&layout, &ImageUrlBuilder::new("", ""));
        Self {
            title: format!("Page Not Found | {}", layout.brand_name),
            description: view.meta_description.clone(),
            layout: view,
        }
    }
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Self::NotFound(what) = &self {
            tracing::debug!(what = %what, "Not found");
            return (status, NotFoundTemplate::new()).into_response();
        }

        let event_id = sentry::capture_error(&self);
        tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");

        // Details stay in the logs
        let body = match self {
            Self::Sanity(_) => "External service error",
            _ => "Internal server error",
        };
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Record a visitor action on the current Sentry scope.
///
/// Breadcrumbs are attached to any error reported later in the same
/// request.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("product silk-saree".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Sanity(SanityError::Query("bad".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Submission(SinkError("closed".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_sanity_error_hides_details() {
        let err = AppError::Sanity(SanityError::Query("param $slug missing".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"External service error");
    }

    #[tokio::test]
    async fn test_not_found_renders_page() {
        let response = AppError::NotFound("collection archive".to_string()).into_response();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Page Not Found | SAYURA"));
    }
}
