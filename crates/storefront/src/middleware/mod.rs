//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)
//! 5. Cache control (CDN revalidation for pages)

pub mod cache_control;
pub mod request_id;
pub mod security_headers;

pub use cache_control::cache_control_middleware;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
