//! Admin dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

// =============================================================================
// Dashboard Metrics (Static demo numbers)
// =============================================================================

/// A metric card at the top of the dashboard.
pub struct MetricCardView {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// The four dashboard metrics. There is no order or customer data behind
/// them.
fn dashboard_metrics() -> Vec<MetricCardView> {
    vec![
        MetricCardView {
            title: "Total Revenue",
            icon: "📊",
            value: "$45,231.89",
            note: "+20.1% from last month",
        },
        MetricCardView {
            title: "New Customers",
            icon: "👥",
            value: "+2350",
            note: "+180.1% from last month",
        },
        MetricCardView {
            title: "Products",
            icon: "📦",
            value: "+12,234",
            note: "+19% from last month",
        },
        MetricCardView {
            title: "Pending Orders",
            icon: "🛒",
            value: "+573",
            note: "+201 since last hour",
        },
    ]
}

// =============================================================================
// Tabs and Forms
// =============================================================================

/// The three dashboard tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Orders,
    Products,
    Customers,
}

impl AdminTab {
    /// Parse a query value; anything unrecognized falls back to the
    /// orders tab.
    fn parse(value: &str) -> Self {
        match value {
            "products" => Self::Products,
            "customers" => Self::Customers,
            _ => Self::Orders,
        }
    }

    const fn as_query(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Customers => "customers",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Orders => "Orders",
            Self::Products => "Products",
            Self::Customers => "Customers",
        }
    }
}

/// A tab strip entry.
pub struct TabView {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Admin query parameters.
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
}

/// Add New Product form data.
#[derive(Debug, Default, Deserialize)]
pub struct NewProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub show_admin_link: bool,
    pub metrics: Vec<MetricCardView>,
    pub tabs: Vec<TabView>,
    /// Query value of the active tab; the template switches panels on it.
    pub active_tab: &'static str,
    /// Values the Add New Product form renders with.
    pub form: NewProductForm,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the admin dashboard.
#[instrument(skip(_state))]
pub async fn dashboard(
    State(_state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> impl IntoResponse {
    let tab = query.tab.as_deref().map(AdminTab::parse).unwrap_or_default();
    render_dashboard(tab, NewProductForm::default())
}

/// Handle the Add New Product form.
///
/// The demo panel has nothing behind it: the submission is logged and
/// echoed back into the form on the products tab, and no product is
/// created.
#[instrument(skip(_state, form))]
pub async fn create_product(
    State(_state): State<AppState>,
    Form(form): Form<NewProductForm>,
) -> impl IntoResponse {
    tracing::info!(
        name = %form.name,
        price = %form.price,
        description = %form.description,
        "New product submitted"
    );

    render_dashboard(AdminTab::Products, form)
}

fn render_dashboard(tab: AdminTab, form: NewProductForm) -> AdminDashboardTemplate {
    AdminDashboardTemplate {
        show_admin_link: true,
        metrics: dashboard_metrics(),
        tabs: [AdminTab::Orders, AdminTab::Products, AdminTab::Customers]
            .into_iter()
            .map(|entry| TabView {
                label: entry.label(),
                href: admin_url(entry),
                active: entry == tab,
            })
            .collect(),
        active_tab: tab.as_query(),
        form,
    }
}

/// Build a dashboard URL; the default tab keeps the bare path.
fn admin_url(tab: AdminTab) -> String {
    if tab == AdminTab::Orders {
        "/admin".to_string()
    } else {
        format!("/admin?tab={}", tab.as_query())
    }
}
