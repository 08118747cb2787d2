//! Integration tests for the product detail page.
//!
//! The app is booted in-process on an ephemeral port; no external
//! services are required.
//!
//! Run with: cargo test -p eshop-integration-tests

use eshop_integration_tests::TestContext;
use reqwest::StatusCode;

// ============================================================================
// Rendering
// ============================================================================

#[tokio::test]
async fn test_detail_renders_the_demo_product() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/products/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("Premium T-Shirt"));
    assert!(body.contains("$29.99"));
    assert!(body.contains("A high-quality, comfortable t-shirt made from 100% cotton."));

    // Variant groups with all options rendered as links
    for option in ["S", "M", "L", "XL", "White", "Black", "Blue", "Red"] {
        assert!(body.contains(&format!(">{option}</a>")), "missing option {option}");
    }

    // Specifications tab is the default
    assert!(body.contains("Machine wash cold"));
    assert!(!body.contains("Great product, very comfortable!"));
}

#[tokio::test]
async fn test_detail_renders_for_any_numeric_id() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/products/424242").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Premium T-Shirt"));
    // Links built on the page stay on the requested id
    assert!(body.contains("/products/424242?"));
}

#[tokio::test]
async fn test_detail_rejects_non_numeric_id() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/products/premium-t-shirt").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// URL State
// ============================================================================

#[tokio::test]
async fn test_variant_links_carry_earlier_choices() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/products/1?Size=M")
        .await
        .text()
        .await
        .expect("Failed to read response");

    // Color option links keep the Size choice, in group-name order
    assert!(body.contains("Color=Blue&amp;Size=M"));
    // Re-picking within the same group replaces, not appends
    assert!(!body.contains("Size=M&amp;Size=L"));
}

#[tokio::test]
async fn test_tab_links_switch_panels() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/products/1?tab=reviews")
        .await
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("John Doe"));
    assert!(body.contains("Jane Smith"));
    assert!(body.contains("Good quality, but sizing runs a bit small."));
    assert!(!body.contains("Machine wash cold"));
}

#[tokio::test]
async fn test_unknown_tab_falls_back_to_specifications() {
    let ctx = TestContext::launch().await;

    let body = ctx
        .get("/products/1?tab=shipping")
        .await
        .text()
        .await
        .expect("Failed to read response");
    assert!(body.contains("Machine wash cold"));
}

#[tokio::test]
async fn test_out_of_range_image_index_still_renders() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/products/1?image=9").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("gallery-thumb-active"));
}

#[tokio::test]
async fn test_unrecognized_query_keys_are_dropped() {
    let ctx = TestContext::launch().await;

    let resp = ctx.get("/products/1?Fabric=Linen&utm_source=mail").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(!body.contains("Fabric=Linen"));
    assert!(!body.contains("utm_source"));
}
