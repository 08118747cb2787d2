//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (carousel, category filter, grid)
//! GET  /health            - Health check
//!
//! # Products
//! GET  /products/{id}     - Product detail (gallery, variants, specs, reviews)
//!
//! # Cart
//! GET  /cart              - Cart page with order summary
//!
//! # Profile
//! GET  /profile           - Profile page
//! POST /profile           - Profile form submit (echoed, never stored)
//!
//! # Admin
//! GET  /admin             - Admin dashboard (metric cards, tab strip)
//! POST /admin/products    - Add New Product form (logged, never stored)
//! ```
//!
//! Every view state a page has lives in its URL: the carousel position,
//! category filter, sort order, gallery image, variant choices, and the
//! admin tab are all query parameters, so every page is a plain GET.

pub mod admin;
pub mod cart;
pub mod home;
pub mod products;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Image path every demo entity points at.
pub(crate) const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product detail
        .route("/products/{id}", get(products::show))
        // Cart
        .route("/cart", get(cart::show))
        // Profile
        .route("/profile", get(profile::show).post(profile::update))
        // Admin dashboard
        .route("/admin", get(admin::dashboard))
        .route("/admin/products", post(admin::create_product))
}
