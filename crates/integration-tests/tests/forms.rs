//! Contact and newsletter form posts.

use axum::http::StatusCode;
use sayura_integration_tests::{FixtureSource, TestApp};

#[tokio::test]
async fn test_contact_page_has_form() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let body = app.get("/contact").await.body;

    assert!(body.contains("id=\"contact-form\""));
    assert!(body.contains("action=\"/contact\""));
    assert!(body.contains("<textarea"));
}

#[tokio::test]
async fn test_contact_missing_fields_rejected() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app.post_form("/contact", &[("name", "Asha")]).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please fill in:"));
    assert!(resp.body.contains("value=\"Asha\""));
    assert!(!resp.body.contains("<html"));
}

#[tokio::test]
async fn test_contact_invalid_email_rejected() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app
        .post_form(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "not-an-email"),
                ("subject", "Bridal fitting"),
                ("message", "Hello"),
            ],
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please enter a valid"));
}

#[tokio::test]
async fn test_contact_accepted() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app
        .post_form(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("subject", "Bridal fitting"),
                ("message", "Do you take appointments on Sundays?"),
            ],
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Thank You!"));
    assert!(resp.body.contains("data-reset-after=\"3000\""));
    assert!(!resp.body.contains("<form"));
    assert!(resp.header("cache-control").starts_with("no-store"));
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app
        .post_form("/newsletter", &[("email", "reader@example.com")])
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Thank you for subscribing!"));
    assert!(resp.body.contains("data-reset-after=\"3000\""));
}

#[tokio::test]
async fn test_newsletter_invalid_email() {
    let app = TestApp::new(FixtureSource::empty()).await;
    let resp = app.post_form("/newsletter", &[("email", "nope")]).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please enter a valid email address."));
    assert!(resp.body.contains("value=\"nope\""));
    assert!(!resp.body.contains("data-reset-after"));
}
