//! Health checks and response headers.

use axum::http::StatusCode;
use sayura_integration_tests::{FixtureSource, TestApp};

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new(FixtureSource::failing()).await;
    let resp = app.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
    assert!(resp.header("cache-control").starts_with("no-store"));
}

#[tokio::test]
async fn test_ready_follows_content_store() {
    let app = TestApp::new(FixtureSource::empty()).await;
    assert_eq!(app.get("/health/ready").await.status, StatusCode::OK);

    let app = TestApp::new(FixtureSource::failing()).await;
    assert_eq!(
        app.get("/health/ready").await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn test_pages_are_cacheable() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app.get("/about").await;

    assert_eq!(
        resp.header("cache-control"),
        "public, max-age=0, s-maxage=3600, stale-while-revalidate"
    );
}

#[tokio::test]
async fn test_pages_vary_on_fragment_header() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let full = app.get("/new-arrivals").await;
    let fragment = app.get_fragment("/new-arrivals").await;

    assert!(full.body.contains("<html"));
    assert!(!fragment.body.contains("<html"));
    for resp in [&full, &fragment] {
        assert!(resp.header("cache-control").starts_with("public"));
        assert!(resp.header("vary").to_ascii_lowercase().contains("hx-request"));
    }

    let asset = app.get("/static/css/main.css").await;
    assert!(asset.header("vary").is_empty());
}

#[tokio::test]
async fn test_errors_are_not_cached() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app.get("/products/missing").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.header("cache-control").starts_with("no-store"));
}

#[tokio::test]
async fn test_request_id_and_security_headers() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app.get("/health").await;

    assert!(!resp.header("x-request-id").is_empty());
    assert_eq!(resp.header("x-content-type-options"), "nosniff");
}
