//! Integration tests for the home page.
//!
//! The app is booted in-process on an ephemeral port; no external
//! services are required.
//!
//! Run with: cargo test -p eshop-integration-tests

use eshop_integration_tests::TestContext;
use reqwest::StatusCode;

// ============================================================================
// Liveness
// ============================================================================

#[tokio::test]
async fn test_health_returns_ok() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read response"), "ok");
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/").await;
    let header = resp
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header");
    assert!(!header.to_str().expect("Non-ASCII request id").is_empty());
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let ctx = TestContext::launch().await;

    let resp = ctx
        .client
        .get(format!("{}/health", ctx.base_url))
        .header("x-request-id", "test-trace-1")
        .send()
        .await
        .expect("Request failed");
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .expect("Missing x-request-id header"),
        "test-trace-1"
    );
}

// ============================================================================
// Page Content
// ============================================================================

#[tokio::test]
async fn test_home_renders_slider_categories_and_grid() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    // Hero slider
    assert!(body.contains("Summer Sale"));
    assert!(body.contains("Up to 50% off on selected items"));

    // Category sidebar
    assert!(body.contains("Categories"));
    assert!(body.contains("Home &amp; Garden"));

    // All six products with prices
    for (name, price) in [("Product 1", "$19.99"), ("Product 6", "$69.99")] {
        assert!(body.contains(name), "missing {name}");
        assert!(body.contains(price), "missing {price}");
    }
}

#[tokio::test]
async fn test_home_nav_has_no_admin_link() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/")
        .await
        .text()
        .await
        .expect("Failed to read response");
    assert!(!body.contains("href=\"/admin\""));
}

// ============================================================================
// URL State
// ============================================================================

#[tokio::test]
async fn test_slide_links_wrap_around() {
    let ctx = TestContext::launch().await;

    // On the first slide, next goes forward and prev wraps to the last
    let body = ctx
        .get("/")
        .await
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("href=\"/?slide=1\""));
    assert!(body.contains("href=\"/?slide=2\""));

    // On the last slide, next wraps instead of stepping out of range
    let body = ctx
        .get("/?slide=2")
        .await
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("href=\"/?slide=1\""));
    assert!(!body.contains("slide=3"));
}

#[tokio::test]
async fn test_category_filter_empties_the_grid() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/?category=Electronics").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(!body.contains("Product 1"));
    // The page itself still renders
    assert!(body.contains("Summer Sale"));
}

#[tokio::test]
async fn test_sort_reverses_grid_order() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/?sort=price-high-low")
        .await
        .text()
        .await
        .expect("Failed to read response");
    let first = body.find("Product 6").expect("Product 6 missing");
    let last = body.find("Product 1").expect("Product 1 missing");
    assert!(
        first < last,
        "expected Product 6 to render before Product 1"
    );
}

#[tokio::test]
async fn test_unknown_sort_value_falls_back_to_featured() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/?sort=rating")
        .await
        .text()
        .await
        .expect("Failed to read response");
    let first = body.find("Product 1").expect("Product 1 missing");
    let last = body.find("Product 6").expect("Product 6 missing");
    assert!(first < last);
}

#[tokio::test]
async fn test_malformed_slide_is_rejected() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/?slide=first").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
