//! Integration tests for E-Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p eshop-integration-tests
//! ```
//!
//! Every test boots the full storefront application in-process on an
//! ephemeral port and drives it with a real HTTP client. The demo store
//! has no database and no upstream APIs, so no external services need to
//! be running.

use std::net::{IpAddr, Ipv4Addr};

use eshop_storefront::config::StorefrontConfig;
use eshop_storefront::state::AppState;

/// A running storefront plus a client pointed at it.
///
/// The server task is detached; it lives until the test process exits.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Boot the full application on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics when the listener or client cannot be set up; either means
    /// the test environment itself is broken.
    pub async fn launch() -> Self {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        };
        let app = eshop_storefront::app(AppState::new(config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read listener address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// GET a path on the running server.
    ///
    /// # Panics
    ///
    /// Panics when the request cannot be sent at all; HTTP error statuses
    /// are returned for the test to assert on.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// POST a form to a path on the running server.
    ///
    /// # Panics
    ///
    /// Panics when the request cannot be sent at all.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .form(form)
            .send()
            .await
            .expect("Request failed")
    }
}
