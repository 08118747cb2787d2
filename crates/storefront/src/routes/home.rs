//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::instrument;

use eshop_core::browse::{self, ALL_CATEGORIES, SortOption};
use eshop_core::catalog::Product;
use eshop_core::slider::{self, Slide};
use eshop_core::types::{CurrencyCode, Price, ProductId};

use crate::filters;
use crate::state::AppState;

use super::PLACEHOLDER_IMAGE;

// =============================================================================
// Demo Catalog (Static content for the grid and carousel)
// =============================================================================

/// Categories offered in the sidebar and the filter bar.
const CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
];

/// The promotional slides for the hero carousel.
fn promo_slides() -> Vec<Slide> {
    let slide = |title: &str, description: &str| Slide {
        image: PLACEHOLDER_IMAGE.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    };
    vec![
        slide("Summer Sale", "Up to 50% off on selected items"),
        slide("New Arrivals", "Check out our latest products"),
        slide("Free Shipping", "On orders over $50"),
    ]
}

/// The demo product grid.
///
/// None of these carry a category, so picking any concrete category
/// filters the grid down to nothing.
fn demo_products() -> Vec<Product> {
    let product = |id: i32, name: &str, cents: i64| Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        images: vec![PLACEHOLDER_IMAGE.to_string()],
        category: None,
        description: None,
        variants: Vec::new(),
        specifications: Vec::new(),
        reviews: Vec::new(),
    };
    vec![
        product(1, "Product 1", 1999),
        product(2, "Product 2", 2999),
        product(3, "Product 3", 3999),
        product(4, "Product 4", 4999),
        product(5, "Product 5", 5999),
        product(6, "Product 6", 6999),
    ]
}

// =============================================================================
// Query Parameters and Views
// =============================================================================

/// Query parameters accepted by the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub slide: Option<usize>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// A hero slide with its visibility resolved.
pub struct SlideView {
    pub image: String,
    pub title: String,
    pub description: String,
    pub active: bool,
}

/// A category link carrying the rest of the page state.
pub struct CategoryLink {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// One entry of the sort menu.
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Product card display data for templates.
pub struct ProductCardView {
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.display(),
            image: product
                .primary_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub show_admin_link: bool,
    /// Hero slides with the current one marked active.
    pub slides: Vec<SlideView>,
    pub prev_href: String,
    pub next_href: String,
    pub current_slide: usize,
    /// Sidebar category links.
    pub categories: Vec<CategoryLink>,
    /// Entries of the sort dropdown.
    pub sort_options: Vec<SortOptionView>,
    /// Cards for the filtered, sorted grid.
    pub products: Vec<ProductCardView>,
}

// =============================================================================
// Handler
// =============================================================================

/// Display the home page.
#[instrument(skip(_state))]
pub async fn home(
    State(_state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let category = query
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let sort = query
        .sort
        .as_deref()
        .map(SortOption::parse)
        .unwrap_or_default();

    let slides = promo_slides();
    let current_slide = slider::current(query.slide.unwrap_or(0), slides.len());

    let products = demo_products();
    let filtered = browse::filter_by_category(&products, &category);
    let sorted = browse::sort_products(&filtered, sort);

    HomeTemplate {
        show_admin_link: false,
        slides: slides
            .iter()
            .enumerate()
            .map(|(index, slide)| SlideView {
                image: slide.image.clone(),
                title: slide.title.clone(),
                description: slide.description.clone(),
                active: index == current_slide,
            })
            .collect(),
        prev_href: home_url(slider::prev(current_slide, slides.len()), &category, sort),
        next_href: home_url(slider::next(current_slide, slides.len()), &category, sort),
        current_slide,
        categories: CATEGORIES
            .iter()
            .map(|name| CategoryLink {
                name: (*name).to_string(),
                href: home_url(current_slide, name, sort),
                active: *name == category,
            })
            .collect(),
        sort_options: sort_menu(sort),
        products: sorted.iter().map(ProductCardView::from).collect(),
    }
}

/// Build a home page URL, leaving out parameters still at their defaults
/// so `/` stays the canonical address of the untouched page.
fn home_url(slide: usize, category: &str, sort: SortOption) -> String {
    let mut params = Vec::new();
    if slide != 0 {
        params.push(format!("slide={slide}"));
    }
    if category != ALL_CATEGORIES {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if sort != SortOption::Featured {
        params.push(format!("sort={}", sort.as_query()));
    }
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// The sort menu with the current choice marked selected.
fn sort_menu(current: SortOption) -> Vec<SortOptionView> {
    [
        (SortOption::Featured, "Featured"),
        (SortOption::PriceLowHigh, "Price: Low to High"),
        (SortOption::PriceHighLow, "Price: High to Low"),
    ]
    .into_iter()
    .map(|(option, label)| SortOptionView {
        value: option.as_query(),
        label,
        selected: option == current,
    })
    .collect()
}
