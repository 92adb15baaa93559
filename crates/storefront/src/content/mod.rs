//! Content access for page composition.
//!
//! [`ContentSource`] is the seam between routes and the CMS: production uses
//! [`SanityClient`](crate::sanity::SanityClient), tests use an in-memory
//! implementation. Compiled-in page defaults live in [`defaults`]; form
//! submissions go through [`forms`].

pub mod defaults;
pub mod forms;

use std::collections::HashSet;

use async_trait::async_trait;
use sayura_core::{
    AboutPage, Category, Collection, HeroSection, InstagramPost, Product, SiteSettings, Slug,
    StoreLocation,
};

use crate::sanity::SanityError;

/// Typed read operations against the content store.
///
/// Each method maps to exactly one query. Singletons and slug lookups
/// return `Ok(None)` when the document does not exist; errors are only
/// returned when the store itself could not be reached or answered badly.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn hero_section(&self) -> Result<Option<HeroSection>, SanityError>;

    /// Active collections, ascending by `order`.
    async fn collections(&self) -> Result<Vec<Collection>, SanityError>;

    async fn collection_by_slug(&self, slug: &Slug) -> Result<Option<Collection>, SanityError>;

    /// All products, newest first.
    async fn products(&self) -> Result<Vec<Product>, SanityError>;

    async fn product_by_slug(&self, slug: &Slug) -> Result<Option<Product>, SanityError>;

    /// Every product slug, used to enumerate detail pages at startup.
    async fn product_slugs(&self) -> Result<Vec<Slug>, SanityError>;

    /// Products flagged new, newest first.
    async fn new_arrivals(&self) -> Result<Vec<Product>, SanityError>;

    /// Products flagged featured, newest first.
    async fn featured_products(&self) -> Result<Vec<Product>, SanityError>;

    async fn products_by_category(&self, category: &Slug) -> Result<Vec<Product>, SanityError>;

    /// Up to four products sharing `category`, excluding `exclude`.
    async fn related_products(
        &self,
        category: &Slug,
        exclude: &Slug,
    ) -> Result<Vec<Product>, SanityError>;

    /// Categories by name.
    async fn categories(&self) -> Result<Vec<Category>, SanityError>;

    /// Stores by name.
    async fn store_locations(&self) -> Result<Vec<StoreLocation>, SanityError>;

    async fn about_page(&self) -> Result<Option<AboutPage>, SanityError>;

    async fn site_settings(&self) -> Result<Option<SiteSettings>, SanityError>;

    /// Active posts, ascending by `order`.
    async fn instagram_posts(&self) -> Result<Vec<InstagramPost>, SanityError>;
}

/// Product slugs known when the server started.
///
/// Detail pages outside this set answer 404 without touching the content
/// store. A product published after startup becomes reachable on the next
/// deploy.
#[derive(Debug, Clone, Default)]
pub struct ProductSlugIndex {
    slugs: HashSet<Slug>,
}

impl ProductSlugIndex {
    #[must_use]
    pub fn new(slugs: impl IntoIterator<Item = Slug>) -> Self {
        Self {
            slugs: slugs.into_iter().filter(|slug| !slug.is_empty()).collect(),
        }
    }

    /// Enumerate slugs from the content source.
    ///
    /// # Errors
    ///
    /// Returns the content source error if the enumeration query fails.
    pub async fn load(source: &dyn ContentSource) -> Result<Self, SanityError> {
        let index = Self::new(source.product_slugs().await?);
        tracing::info!(count = index.len(), "Product slug index loaded");
        Ok(index)
    }

    #[must_use]
    pub fn contains(&self, slug: &Slug) -> bool {
        self.slugs.contains(slug)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
