//! Catalog entities shared by the storefront pages.
//!
//! Everything here is plain data. The demo catalog itself is owned by the
//! pages that render it; these are the shapes those literals share.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, ReviewId};

/// A product as shown in grids, cart lines, and the detail page.
///
/// Optional sections are empty when a product does not carry them; only
/// the detail page populates the gallery, variants, specifications, and
/// reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image paths; the first one doubles as the grid thumbnail.
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantGroup>,
    #[serde(default)]
    pub specifications: Vec<Specification>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Primary image used by grids and cart lines.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Look up a variant group by name.
    #[must_use]
    pub fn variant_group(&self, name: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|group| group.name == name)
    }
}

/// A named group of mutually exclusive options (e.g., Size: S/M/L/XL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantGroup {
    pub name: String,
    pub options: Vec<String>,
}

/// One row of the specifications table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// Star rating, 1 to [`Review::MAX_RATING`].
    pub rating: u8,
    pub comment: String,
}

impl Review {
    /// Highest rating a review can carry.
    pub const MAX_RATING: u8 = 5;
}
