//! Integration tests for the SAYURA storefront.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`;
//! no network or content store is needed. [`FixtureSource`] stands in for
//! Sanity and answers every query from in-memory documents.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sayura-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE},
};
use sayura_core::{
    AboutPage, Category, Collection, HeroSection, InstagramPost, Product, SiteSettings, Slug,
    StoreLocation,
};
use sayura_storefront::config::{LogFormat, SanityConfig, StorefrontConfig};
use sayura_storefront::content::forms::LoggingSink;
use sayura_storefront::content::{ContentSource, ProductSlugIndex};
use sayura_storefront::sanity::SanityError;
use sayura_storefront::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Revalidation interval used by [`TestApp`].
pub const REVALIDATE: Duration = Duration::from_secs(3600);

/// In-memory content store.
///
/// Queries filter and order the way the GROQ projections do where the
/// storefront relies on it; list order is otherwise left as given so tests
/// can check that pages sort for themselves.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    pub hero: Option<HeroSection>,
    pub collections: Vec<Collection>,
    pub products: Vec<Product>,
    pub stores: Vec<StoreLocation>,
    pub about: Option<AboutPage>,
    pub settings: Option<SiteSettings>,
    pub instagram: Vec<InstagramPost>,
    /// Every query fails as if the content store were unreachable.
    pub failing: bool,
}

impl FixtureSource {
    /// An empty but reachable content store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A content store that answers every query with an error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    #[must_use]
    pub fn with_collections(mut self, collections: impl IntoIterator<Item = Collection>) -> Self {
        self.collections.extend(collections);
        self
    }

    #[must_use]
    pub fn with_stores(mut self, stores: impl IntoIterator<Item = StoreLocation>) -> Self {
        self.stores.extend(stores);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn with_about(mut self, about: AboutPage) -> Self {
        self.about = Some(about);
        self
    }

    fn check(&self) -> Result<(), SanityError> {
        if self.failing {
            return Err(SanityError::Status {
                status: 503,
                body: "fixture store unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn select(&self, keep: impl Fn(&Product) -> bool) -> Result<Vec<Product>, SanityError> {
        self.check()?;
        Ok(self.products.iter().filter(|p| keep(p)).cloned().collect())
    }
}

fn in_category(product: &Product, category: &Slug) -> bool {
    product
        .category
        .as_ref()
        .is_some_and(|c| &c.slug == category)
}

#[async_trait]
impl ContentSource for FixtureSource {
    async fn hero_section(&self) -> Result<Option<HeroSection>, SanityError> {
        self.check()?;
        Ok(self.hero.clone())
    }

    async fn collections(&self) -> Result<Vec<Collection>, SanityError> {
        self.check()?;
        Ok(self
            .collections
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn collection_by_slug(&self, slug: &Slug) -> Result<Option<Collection>, SanityError> {
        self.check()?;
        Ok(self.collections.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn products(&self) -> Result<Vec<Product>, SanityError> {
        self.select(|_| true)
    }

    async fn product_by_slug(&self, slug: &Slug) -> Result<Option<Product>, SanityError> {
        self.check()?;
        Ok(self.products.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn product_slugs(&self) -> Result<Vec<Slug>, SanityError> {
        self.check()?;
        Ok(self.products.iter().map(|p| p.slug.clone()).collect())
    }

    async fn new_arrivals(&self) -> Result<Vec<Product>, SanityError> {
        self.select(|p| p.badges.is_new)
    }

    async fn featured_products(&self) -> Result<Vec<Product>, SanityError> {
        self.select(Product::is_featured)
    }

    async fn products_by_category(&self, category: &Slug) -> Result<Vec<Product>, SanityError> {
        self.select(|p| in_category(p, category))
    }

    async fn related_products(
        &self,
        category: &Slug,
        exclude: &Slug,
    ) -> Result<Vec<Product>, SanityError> {
        let mut related = self.select(|p| in_category(p, category) && &p.slug != exclude)?;
        related.truncate(4);
        Ok(related)
    }

    async fn categories(&self) -> Result<Vec<Category>, SanityError> {
        self.check()?;
        let mut categories: Vec<Category> = self
            .products
            .iter()
            .filter_map(|p| p.category.clone())
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        categories.dedup();
        Ok(categories)
    }

    async fn store_locations(&self) -> Result<Vec<StoreLocation>, SanityError> {
        self.check()?;
        Ok(self.stores.clone())
    }

    async fn about_page(&self) -> Result<Option<AboutPage>, SanityError> {
        self.check()?;
        Ok(self.about.clone())
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, SanityError> {
        self.check()?;
        Ok(self.settings.clone())
    }

    async fn instagram_posts(&self) -> Result<Vec<InstagramPost>, SanityError> {
        self.check()?;
        Ok(self.instagram.clone())
    }
}

/// Deserialize a document the way the content store delivers it.
pub fn document<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture document matches its schema")
}

/// A product in `category` with the given slug and price.
#[must_use]
pub fn product(slug: &str, name: &str, category: &str, price: u64) -> Product {
    document(serde_json::json!({
        "_id": format!("product-{slug}"),
        "name": name,
        "slug": {"current": slug},
        "category": {"name": category, "slug": {"current": category.to_lowercase()}},
        "price": price,
        "images": [],
        "colors": [],
    }))
}

/// A collection with an explicit display order.
#[must_use]
pub fn collection(slug: &str, title: &str, order: i64) -> Collection {
    document(serde_json::json!({
        "_id": format!("collection-{slug}"),
        "title": title,
        "slug": {"current": slug},
        "description": format!("{title} description"),
        "order": order,
    }))
}

/// Test configuration; the Sanity project is never contacted.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        sanity: SanityConfig {
            project_id: "testproj".to_string(),
            dataset: "test".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: false,
            api_token: None,
        },
        revalidate: REVALIDATE,
        sentry_dsn: None,
        sentry_environment: None,
        log_format: LogFormat::Pretty,
    }
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, empty when absent.
    #[must_use]
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// The storefront router over a [`FixtureSource`].
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the app, enumerating product slugs the way startup does.
    ///
    /// A failing fixture starts with no known products.
    pub async fn new(source: FixtureSource) -> Self {
        let product_slugs = ProductSlugIndex::load(&source)
            .await
            .unwrap_or_else(|_| ProductSlugIndex::new(Vec::new()));
        Self::with_product_slugs(source, product_slugs)
    }

    /// Build the app with an explicit startup slug set.
    #[must_use]
    pub fn with_product_slugs(source: FixtureSource, product_slugs: ProductSlugIndex) -> Self {
        let state = AppState::new(
            test_config(),
            Arc::new(source),
            product_slugs,
            Arc::new(LoggingSink),
        );
        Self {
            router: sayura_storefront::build_router(state),
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body is readable");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    /// GET as the fragment script does.
    pub async fn get_fragment(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .uri(uri)
                .header("HX-Request", "true")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
    }

    /// POST an urlencoded form.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("valid request"),
        )
        .await
    }
}
