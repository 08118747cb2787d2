//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use eshop_core::catalog::{Product, Review, Specification, VariantGroup};
use eshop_core::types::{CurrencyCode, Price, ProductId, ReviewId};
use eshop_core::variants::VariantSelection;

use crate::filters;
use crate::state::AppState;

use super::PLACEHOLDER_IMAGE;

/// Query keys with a fixed meaning on this page. Every other key is
/// interpreted as a variant group name.
const IMAGE_PARAM: &str = "image";
const TAB_PARAM: &str = "tab";

/// The demo detail product.
///
/// Every `/products/{id}` renders this one; the path id is parsed but
/// never looked up.
fn detail_product() -> Product {
    Product {
        id: ProductId::new(1),
        name: "Premium T-Shirt".to_string(),
        price: Price::from_cents(2999, CurrencyCode::USD),
        images: vec![PLACEHOLDER_IMAGE.to_string(); 3],
        category: None,
        description: Some(
            "A high-quality, comfortable t-shirt made from 100% cotton.".to_string(),
        ),
        variants: vec![
            VariantGroup {
                name: "Size".to_string(),
                options: vec![
                    "S".to_string(),
                    "M".to_string(),
                    "L".to_string(),
                    "XL".to_string(),
                ],
            },
            VariantGroup {
                name: "Color".to_string(),
                options: vec![
                    "White".to_string(),
                    "Black".to_string(),
                    "Blue".to_string(),
                    "Red".to_string(),
                ],
            },
        ],
        specifications: vec![
            Specification {
                name: "Material".to_string(),
                value: "100% Cotton".to_string(),
            },
            Specification {
                name: "Fit".to_string(),
                value: "Regular".to_string(),
            },
            Specification {
                name: "Care".to_string(),
                value: "Machine wash cold".to_string(),
            },
        ],
        reviews: vec![
            Review {
                id: ReviewId::new(1),
                author: "John Doe".to_string(),
                rating: 5,
                comment: "Great product, very comfortable!".to_string(),
            },
            Review {
                id: ReviewId::new(2),
                author: "Jane Smith".to_string(),
                rating: 4,
                comment: "Good quality, but sizing runs a bit small.".to_string(),
            },
        ],
    }
}

/// The two info tabs under the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductTab {
    #[default]
    Specifications,
    Reviews,
}

impl ProductTab {
    /// Parse a query value; anything unrecognized falls back to the
    /// specifications tab.
    fn parse(value: &str) -> Self {
        match value {
            "reviews" => Self::Reviews,
            _ => Self::Specifications,
        }
    }

    const fn as_query(self) -> &'static str {
        match self {
            Self::Specifications => "specifications",
            Self::Reviews => "reviews",
        }
    }
}

/// Gallery thumbnail display data for templates.
pub struct ThumbnailView {
    pub image: String,
    pub href: String,
    pub active: bool,
}

/// One option button inside a variant group.
pub struct VariantOptionView {
    pub label: String,
    pub href: String,
    pub chosen: bool,
}

/// A variant group with its option links resolved.
pub struct VariantGroupView {
    pub name: String,
    pub options: Vec<VariantOptionView>,
}

/// One star of a review's rating row.
pub struct StarView {
    pub filled: bool,
}

/// A review with its star row resolved.
pub struct ReviewView {
    pub author: String,
    /// One entry per possible star, filled or not.
    pub stars: Vec<StarView>,
    pub comment: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            stars: (0..Review::MAX_RATING)
                .map(|star| StarView {
                    filled: star < review.rating,
                })
                .collect(),
            comment: review.comment.clone(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub show_admin_link: bool,
    pub name: String,
    pub price: String,
    pub description: String,
    pub main_image: String,
    pub thumbnails: Vec<ThumbnailView>,
    pub variant_groups: Vec<VariantGroupView>,
    pub specifications: Vec<Specification>,
    pub reviews: Vec<ReviewView>,
    pub specifications_href: String,
    pub reviews_href: String,
    pub reviews_active: bool,
}

/// Display the product detail page.
#[instrument(skip(_state))]
pub async fn show(
    State(_state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let product = detail_product();
    let page_id = ProductId::new(id);
    let (image_index, tab, selection) = view_state(&product, params);

    let thumbnails = product
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| ThumbnailView {
            image: image.clone(),
            href: product_url(page_id, index, tab, &selection),
            active: index == image_index,
        })
        .collect();

    let variant_groups = product
        .variants
        .iter()
        .map(|group| VariantGroupView {
            name: group.name.clone(),
            options: group
                .options
                .iter()
                .map(|option| {
                    let mut with_choice = selection.clone();
                    with_choice.select(group.name.clone(), option.clone());
                    VariantOptionView {
                        label: option.clone(),
                        href: product_url(page_id, image_index, tab, &with_choice),
                        chosen: selection.is_chosen(&group.name, option),
                    }
                })
                .collect(),
        })
        .collect();

    ProductShowTemplate {
        show_admin_link: false,
        name: product.name.clone(),
        price: product.price.display(),
        description: product.description.clone().unwrap_or_default(),
        main_image: product
            .images
            .get(image_index)
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        thumbnails,
        variant_groups,
        specifications: product.specifications.clone(),
        reviews: product.reviews.iter().map(ReviewView::from).collect(),
        specifications_href: product_url(page_id, image_index, ProductTab::Specifications, &selection),
        reviews_href: product_url(page_id, image_index, ProductTab::Reviews, &selection),
        reviews_active: tab == ProductTab::Reviews,
    }
}

/// Resolve the gallery index, active tab, and variant selection from the
/// raw query pairs.
///
/// Unknown keys that do not name a variant group are dropped, and an
/// out-of-range gallery index falls back to the first image.
fn view_state(
    product: &Product,
    params: Vec<(String, String)>,
) -> (usize, ProductTab, VariantSelection) {
    let mut image_index = 0;
    let mut tab = ProductTab::default();
    let mut selection = VariantSelection::new();

    for (key, value) in params {
        match key.as_str() {
            IMAGE_PARAM => image_index = value.parse().unwrap_or(0),
            TAB_PARAM => tab = ProductTab::parse(&value),
            _ if product.variant_group(&key).is_some() => selection.select(key, value),
            _ => {}
        }
    }

    if image_index >= product.images.len() {
        image_index = 0;
    }

    (image_index, tab, selection)
}

/// Build a detail page URL, leaving out parameters still at their
/// defaults.
///
/// Variant choices follow the fixed keys in group-name order, so a link
/// for a given view state always comes out the same.
fn product_url(
    id: ProductId,
    image_index: usize,
    tab: ProductTab,
    selection: &VariantSelection,
) -> String {
    let mut params = Vec::new();
    if image_index != 0 {
        params.push(format!("{IMAGE_PARAM}={image_index}"));
    }
    if tab != ProductTab::Specifications {
        params.push(format!("{TAB_PARAM}={}", tab.as_query()));
    }
    for (group, option) in selection.iter() {
        params.push(format!(
            "{}={}",
            urlencoding::encode(group),
            urlencoding::encode(option)
        ));
    }
    if params.is_empty() {
        format!("/products/{id}")
    } else {
        format!("/products/{id}?{}", params.join("&"))
    }
}
