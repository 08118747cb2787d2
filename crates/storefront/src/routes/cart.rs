//! Cart page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use eshop_core::cart::{CartItem, CartSummary};
use eshop_core::types::{CurrencyCode, Price, ProductId};

use crate::filters;
use crate::state::AppState;

use super::PLACEHOLDER_IMAGE;

/// The demo cart contents.
fn demo_cart_items() -> Vec<CartItem> {
    vec![
        CartItem {
            product_id: ProductId::new(1),
            name: "Product 1".to_string(),
            price: Price::from_cents(1999, CurrencyCode::USD),
            image: PLACEHOLDER_IMAGE.to_string(),
            quantity: 2,
        },
        CartItem {
            product_id: ProductId::new(2),
            name: "Product 2".to_string(),
            price: Price::from_cents(2999, CurrencyCode::USD),
            image: PLACEHOLDER_IMAGE.to_string(),
            quantity: 1,
        },
    ]
}

/// Cart line display data for templates.
pub struct CartLineView {
    pub name: String,
    pub href: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            href: format!("/products/{}", item.product_id),
            image: item.image.clone(),
            price: item.price.display(),
            quantity: item.quantity,
        }
    }
}

/// Order summary display data for templates.
pub struct SummaryView {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
}

impl From<CartSummary> for SummaryView {
    fn from(summary: CartSummary) -> Self {
        Self {
            subtotal: summary.subtotal.display(),
            shipping: summary.shipping.display(),
            total: summary.total.display(),
        }
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub show_admin_link: bool,
    pub items: Vec<CartLineView>,
    pub summary: SummaryView,
}

/// Display the cart page.
#[instrument(skip(_state))]
pub async fn show(State(_state): State<AppState>) -> impl IntoResponse {
    let items = demo_cart_items();

    CartShowTemplate {
        show_admin_link: false,
        summary: SummaryView::from(CartSummary::from_items(&items)),
        items: items.iter().map(CartLineView::from).collect(),
    }
}
