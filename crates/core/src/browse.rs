//! Category filtering and price sorting for the product grid.

use crate::catalog::Product;

/// The pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Grid sort orders. The query values match what the sort menu submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Catalog order, untouched.
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOption {
    /// Parse a query value; anything unrecognized falls back to
    /// [`SortOption::Featured`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low-high" => Self::PriceLowHigh,
            "price-high-low" => Self::PriceHighLow,
            _ => Self::Featured,
        }
    }

    /// The query value for this sort order.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
        }
    }
}

/// Keep the products matching `category`.
///
/// [`ALL_CATEGORIES`] keeps everything; any other value keeps only
/// products whose category matches it exactly, so a category with no
/// products yields an empty grid.
#[must_use]
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| {
            category == ALL_CATEGORIES || product.category.as_deref() == Some(category)
        })
        .cloned()
        .collect()
}

/// Return a copy of `products` ordered by `sort`.
///
/// The sort is stable: products with equal prices keep their incoming
/// order, and [`SortOption::Featured`] returns the input order untouched.
#[must_use]
pub fn sort_products(products: &[Product], sort: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortOption::Featured => {}
        SortOption::PriceLowHigh => {
            sorted.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
        }
        SortOption::PriceHighLow => {
            sorted.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
        }
    }
    sorted
}
