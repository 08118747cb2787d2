//! Cart lines and order summary totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// Flat shipping fee in cents, applied to every order.
const FLAT_SHIPPING_CENTS: i64 = 500;

/// The flat shipping fee shown in the order summary.
#[must_use]
pub fn flat_shipping() -> Price {
    Price::from_cents(FLAT_SHIPPING_CENTS, CurrencyCode::USD)
}

/// One line of the cart: product fields snapshot plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.price.amount * Decimal::from(self.quantity),
            self.price.currency_code,
        )
    }
}

/// Order summary totals derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CartSummary {
    /// Compute the summary for a set of cart lines.
    ///
    /// The subtotal is the sum of line totals; the grand total adds the
    /// flat shipping fee on top, also for an empty cart.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let shipping = flat_shipping();
        let subtotal_amount: Decimal = items.iter().map(|item| item.line_total().amount).sum();
        let subtotal = Price::new(subtotal_amount, shipping.currency_code);
        let total = Price::new(subtotal.amount + shipping.amount, shipping.currency_code);
        Self {
            subtotal,
            shipping,
            total,
        }
    }
}
