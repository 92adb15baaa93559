//! Sanity HTTP query API client.
//!
//! Uses `reqwest` 0.13 against `GET /v{apiVersion}/data/query/{dataset}`.
//! Query results are cached with `moka` for the revalidation interval.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use sayura_core::{
    AboutPage, Category, Collection, HeroSection, InstagramPost, Product, SiteSettings, Slug,
    StoreLocation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{SanityError, queries};
use crate::config::SanityConfig;
use crate::content::ContentSource;

const MAX_CACHED_QUERIES: u64 = 1000;
const ERROR_BODY_PREVIEW: usize = 500;

/// Successful query response.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: serde_json::Value,
}

/// Error payload returned with 4xx responses.
#[derive(Deserialize)]
struct QueryErrorResponse {
    error: QueryErrorDetail,
}

#[derive(Deserialize)]
struct QueryErrorDetail {
    #[serde(default)]
    description: String,
}

// =============================================================================
// SanityClient
// =============================================================================

/// Client for the Sanity query API.
#[derive(Clone)]
pub struct SanityClient {
    inner: Arc<SanityClientInner>,
}

struct SanityClientInner {
    client: reqwest::Client,
    endpoint: String,
    token: Option<SecretString>,
    cache: Option<Cache<String, Arc<serde_json::Value>>>,
}

impl SanityClient {
    /// Create a new client.
    ///
    /// A zero `revalidate` disables caching.
    #[must_use]
    pub fn new(config: &SanityConfig, revalidate: Duration) -> Self {
        let cache = (!revalidate.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHED_QUERIES)
                .time_to_live(revalidate)
                .build()
        });

        Self {
            inner: Arc::new(SanityClientInner {
                client: reqwest::Client::new(),
                endpoint: config.query_endpoint(),
                token: config.api_token.clone(),
                cache,
            }),
        }
    }

    /// Run a GROQ query and deserialize its `result`.
    ///
    /// `params` are passed as `$name` query parameters, JSON-encoded.
    #[instrument(skip(self, query, params), fields(query = %name))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        name: &'static str,
        query: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, SanityError> {
        let cache_key = cache_key(query, params);

        if let Some(cache) = &self.inner.cache
            && let Some(cached) = cache.get(&cache_key).await
        {
            debug!("Cache hit");
            return Ok(T::deserialize(cached.as_ref())?);
        }

        let mut pairs = Vec::with_capacity(params.len() + 1);
        pairs.push(("query".to_string(), query.to_string()));
        for (param, value) in params {
            pairs.push((format!("${param}"), serde_json::to_string(value)?));
        }

        let mut request = self.inner.client.get(&self.inner.endpoint).query(&pairs);
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(payload) = serde_json::from_str::<QueryErrorResponse>(&body) {
                tracing::error!(status = %status, error = %payload.error.description, "Sanity rejected query");
                return Err(SanityError::Query(payload.error.description));
            }
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            tracing::error!(status = %status, body = %preview, "Sanity returned non-success status");
            return Err(SanityError::Status {
                status: status.as_u16(),
                body: preview,
            });
        }

        let response: QueryResponse = serde_json::from_str(&body).inspect_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                "Failed to parse Sanity response"
            );
        })?;

        let value = T::deserialize(&response.result)?;

        if let Some(cache) = &self.inner.cache {
            cache.insert(cache_key, Arc::new(response.result)).await;
        }

        Ok(value)
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        name: &'static str,
        query: &'static str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, SanityError> {
        let items: Option<Vec<T>> = self.fetch(name, query, params).await?;
        Ok(items.unwrap_or_default())
    }
}

fn cache_key(query: &str, params: &[(&str, &str)]) -> String {
    let mut key = query.to_string();
    for (param, value) in params {
        key.push('\u{1f}');
        key.push_str(param);
        key.push('=');
        key.push_str(value);
    }
    key
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn hero_section(&self) -> Result<Option<HeroSection>, SanityError> {
        self.fetch("hero_section", queries::HERO_SECTION, &[]).await
    }

    async fn collections(&self) -> Result<Vec<Collection>, SanityError> {
        self.fetch_list("collections", queries::COLLECTIONS, &[]).await
    }

    async fn collection_by_slug(&self, slug: &Slug) -> Result<Option<Collection>, SanityError> {
        self.fetch(
            "collection_by_slug",
            queries::COLLECTION_BY_SLUG,
            &[("slug", slug.as_str())],
        )
        .await
    }

    async fn products(&self) -> Result<Vec<Product>, SanityError> {
        self.fetch_list("products", queries::PRODUCTS, &[]).await
    }

    async fn product_by_slug(&self, slug: &Slug) -> Result<Option<Product>, SanityError> {
        self.fetch(
            "product_by_slug",
            queries::PRODUCT_BY_SLUG,
            &[("slug", slug.as_str())],
        )
        .await
    }

    async fn product_slugs(&self) -> Result<Vec<Slug>, SanityError> {
        self.fetch_list("product_slugs", queries::PRODUCT_SLUGS, &[])
            .await
    }

    async fn new_arrivals(&self) -> Result<Vec<Product>, SanityError> {
        self.fetch_list("new_arrivals", queries::NEW_ARRIVALS, &[])
            .await
    }

    async fn featured_products(&self) -> Result<Vec<Product>, SanityError> {
        self.fetch_list("featured_products", queries::FEATURED_PRODUCTS, &[])
            .await
    }

    async fn products_by_category(&self, category: &Slug) -> Result<Vec<Product>, SanityError> {
        self.fetch_list(
            "products_by_category",
            queries::PRODUCTS_BY_CATEGORY,
            &[("categorySlug", category.as_str())],
        )
        .await
    }

    async fn related_products(
        &self,
        category: &Slug,
        exclude: &Slug,
    ) -> Result<Vec<Product>, SanityError> {
        self.fetch_list(
            "related_products",
            queries::RELATED_PRODUCTS,
            &[
                ("categorySlug", category.as_str()),
                ("currentSlug", exclude.as_str()),
            ],
        )
        .await
    }

    async fn categories(&self) -> Result<Vec<Category>, SanityError> {
        self.fetch_list("categories", queries::CATEGORIES, &[]).await
    }

    async fn store_locations(&self) -> Result<Vec<StoreLocation>, SanityError> {
        self.fetch_list("store_locations", queries::STORE_LOCATIONS, &[])
            .await
    }

    async fn about_page(&self) -> Result<Option<AboutPage>, SanityError> {
        self.fetch("about_page", queries::ABOUT_PAGE, &[]).await
    }

    async fn site_settings(&self) -> Result<Option<SiteSettings>, SanityError> {
        self.fetch("site_settings", queries::SITE_SETTINGS, &[]).await
    }

    async fn instagram_posts(&self) -> Result<Vec<InstagramPost>, SanityError> {
        self.fetch_list("instagram_posts", queries::INSTAGRAM_POSTS, &[])
            .await
    }
}
