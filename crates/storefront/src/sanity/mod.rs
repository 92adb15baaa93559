//! Sanity Content Lake access.
//!
//! # Architecture
//!
//! - Read-only GROQ queries over the HTTP query API, one fixed query per
//!   content need (see [`queries`])
//! - Query results are memoized with `moka` for the revalidation interval
//! - Asset references resolve to CDN URLs without any network call
//!   (see [`image`])
//!
//! # Example
//!
//! ```rust,ignore
//! use sayura_storefront::sanity::SanityClient;
//!
//! let client = SanityClient::new(&config.sanity, config.revalidate);
//! let product = client.product_by_slug(&Slug::new("silk-evening-dress")).await?;
//! ```

mod client;
pub mod image;
pub mod queries;

pub use client::SanityClient;
pub use image::ImageUrlBuilder;

use thiserror::Error;

/// Errors that can occur when querying Sanity.
#[derive(Debug, Error)]
pub enum SanityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The query API answered with a non-success status and no error payload.
    #[error("Sanity returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The query was rejected (syntax error, unknown parameter, ...).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
