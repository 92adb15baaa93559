//! Product detail and new arrivals pages.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use sayura_core::Product;
use sayura_integration_tests::{FixtureSource, TestApp, document, product};
use sayura_storefront::content::ProductSlugIndex;
use serde_json::json;

fn saree() -> Product {
    document(json!({
        "_id": "product-silk-saree",
        "name": "Banarasi Silk Saree",
        "slug": {"current": "silk-saree"},
        "category": {"name": "Sarees", "slug": {"current": "sarees"}},
        "price": 45999,
        "images": ["/static/img/saree-1.jpg", "/static/img/saree-2.jpg", "/static/img/saree-3.jpg"],
        "colors": ["Wine", "Ivory"],
        "badges": {"isNew": true, "isLimited": true},
        "tags": ["hand-woven", "zari-work"]
    }))
}

fn catalog() -> FixtureSource {
    FixtureSource::empty().with_products([
        saree(),
        product("cotton-kurta", "Cotton Kurta", "Kurtas", 2999),
        product("linen-saree", "Linen Saree", "Sarees", 8999),
    ])
}

#[tokio::test]
async fn test_unknown_product_not_found() {
    let app = TestApp::new(catalog()).await;
    let resp = app.get("/products/not-a-product").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_published_after_startup_not_found() {
    let startup = ProductSlugIndex::load(&catalog()).await.unwrap();
    let source = catalog().with_products([product("late-drop", "Late Drop", "Sarees", 1000)]);
    let app = TestApp::with_product_slugs(source, startup);

    assert_eq!(app.get("/products/late-drop").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/products/silk-saree").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_product_page_renders_details() {
    let app = TestApp::new(catalog()).await;
    let resp = app.get("/products/silk-saree").await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = &resp.body;
    assert!(body.contains("Banarasi Silk Saree"));
    assert!(body.contains("₹45,999"));
    assert!(body.contains("Limited Edition"));
    assert!(body.contains("hand woven"));
    assert!(body.contains("1 / 3"));
    assert!(body.contains("id=\"color-selector\""));
}

#[tokio::test]
async fn test_product_without_colors_has_no_selector() {
    let app = TestApp::new(catalog()).await;
    let body = app.get("/products/cotton-kurta").await.body;

    assert!(body.contains("Cotton Kurta"));
    assert!(!body.contains("id=\"color-selector\""));
}

#[tokio::test]
async fn test_related_products_share_category() {
    let app = TestApp::new(catalog()).await;
    let body = app.get("/products/silk-saree").await.body;

    assert!(body.contains("You May Also Like"));
    assert!(body.contains("Linen Saree"));
    assert!(!body.contains("Cotton Kurta"));
}

#[tokio::test]
async fn test_no_related_section_without_siblings() {
    let app = TestApp::new(catalog()).await;
    let resp = app.get("/products/cotton-kurta").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.contains("You May Also Like"));
}

#[tokio::test]
async fn test_gallery_navigation_and_lightbox() {
    let app = TestApp::new(catalog()).await;

    let body = app.get("/products/silk-saree?image=1").await.body;
    assert!(body.contains("2 / 3"));
    assert!(!body.contains("role=\"dialog\""));

    let body = app.get("/products/silk-saree?image=2&lightbox=1").await.body;
    assert!(body.contains("role=\"dialog\""));
    assert!(body.contains("scroll-locked"));
    assert!(body.contains("3 / 3"));
}

#[tokio::test]
async fn test_selected_color_shown() {
    let app = TestApp::new(catalog()).await;
    let body = app.get("/products/silk-saree?color=Ivory").await.body;
    assert!(body.contains("Color: <strong>Ivory</strong>"));
}

#[tokio::test]
async fn test_new_arrivals_sorted_by_price() {
    let mut cheap = product("cotton-kurta", "Cotton Kurta", "Kurtas", 2999);
    cheap.badges.is_new = true;
    let mut mid = product("linen-saree", "Linen Saree", "Sarees", 8999);
    mid.badges.is_new = true;
    let app = TestApp::new(FixtureSource::empty().with_products([saree(), mid, cheap])).await;

    let body = app.get("/new-arrivals?sort=price-low").await.body;
    let kurta = body.find("Cotton Kurta").unwrap_or(usize::MAX);
    let linen = body.find("Linen Saree").unwrap_or(usize::MAX);
    let silk = body.find("Banarasi Silk Saree").unwrap_or(usize::MAX);
    assert!(kurta < linen && linen < silk);
}

#[tokio::test]
async fn test_new_arrivals_category_filter() {
    let mut kurta = product("cotton-kurta", "Cotton Kurta", "Kurtas", 2999);
    kurta.badges.is_new = true;
    let app = TestApp::new(FixtureSource::empty().with_products([saree(), kurta])).await;

    let body = app.get("/new-arrivals?category=Kurtas").await.body;
    assert!(body.contains("Showing <strong>1</strong> products in Kurtas"));
}

fn new_arrivals(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let mut p = product(&format!("piece-{i}"), &format!("Piece {i}"), "Sarees", 1000 * i);
            p.badges.is_new = true;
            p
        })
        .collect()
}

#[tokio::test]
async fn test_seasonal_banner_after_eighth_product() {
    let app = TestApp::new(FixtureSource::empty().with_products(new_arrivals(10))).await;
    let body = app.get("/new-arrivals?sort=price-low").await.body;

    let banner = body.find("Seasonal Essentials").unwrap();
    assert!(body.find("Piece 8<").unwrap() < banner);
    assert!(banner < body.find("Piece 9<").unwrap());

    let app = TestApp::new(FixtureSource::empty().with_products(new_arrivals(8))).await;
    assert!(!app.get("/new-arrivals").await.body.contains("Seasonal Essentials"));
}

#[tokio::test]
async fn test_new_arrivals_fragment_is_grid_only() {
    let app = TestApp::new(FixtureSource::empty().with_products([saree()])).await;
    let resp = app.get_fragment("/new-arrivals?sort=price-high").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Banarasi Silk Saree"));
    assert!(!resp.body.contains("<html"));
    assert!(!resp.body.contains("site-footer"));
}
