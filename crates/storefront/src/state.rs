//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::forms::SubmissionSink;
use crate::content::{ContentSource, ProductSlugIndex};
use crate::sanity::ImageUrlBuilder;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is immutable once built.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: Arc<dyn ContentSource>,
    product_slugs: ProductSlugIndex,
    images: ImageUrlBuilder,
    submissions: Arc<dyn SubmissionSink>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `content` - Content source used by every page
    /// * `product_slugs` - Product slugs enumerated at startup
    /// * `submissions` - Destination for contact and newsletter forms
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        content: Arc<dyn ContentSource>,
        product_slugs: ProductSlugIndex,
        submissions: Arc<dyn SubmissionSink>,
    ) -> Self {
        let images = ImageUrlBuilder::new(&config.sanity.project_id, &config.sanity.dataset);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                product_slugs,
                images,
                submissions,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the content source.
    #[must_use]
    pub fn content(&self) -> &dyn ContentSource {
        self.inner.content.as_ref()
    }

    #[must_use]
    pub fn product_slugs(&self) -> &ProductSlugIndex {
        &self.inner.product_slugs
    }

    /// Get a reference to the CDN URL builder.
    #[must_use]
    pub fn images(&self) -> &ImageUrlBuilder {
        &self.inner.images
    }

    #[must_use]
    pub fn submissions(&self) -> &dyn SubmissionSink {
        self.inner.submissions.as_ref()
    }
}
