//! Integration tests for AgentCart.
//!
//! Each test starts the real storefront router on an ephemeral port and
//! talks to it over HTTP, the way an agent would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p agentcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_search`, `api_product`, `api_buy` - API contracts
//! - `discovery` - Discovery documents and their consistency with the API
//! - `agent_workflows` - Multi-step agent sessions

use std::net::SocketAddr;

use agentcart_core::Catalog;
use agentcart_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::Client;
use tokio::net::TcpListener;

/// A storefront running in the background for the duration of a test.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a storefront serving the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn new() -> Self {
        Self::with_catalog(Catalog::builtin()).await
    }

    /// Start a storefront serving `catalog`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn with_catalog(catalog: Catalog) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr: SocketAddr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{addr}");

        let config = StorefrontConfig {
            port: addr.port(),
            base_url: base_url.clone(),
            ..StorefrontConfig::default()
        };
        let router = app(AppState::from_parts(config, catalog));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` a path and decode the JSON body.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or a non-JSON body.
    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("json body"))
    }

    /// `POST` a JSON body to `/api/buy` and decode the response.
    ///
    /// # Panics
    ///
    /// Panics on transport errors or a non-JSON body.
    pub async fn buy(&self, body: &serde_json::Value) -> (u16, serde_json::Value) {
        let response = self
            .client
            .post(self.url("/api/buy"))
            .json(body)
            .send()
            .await
            .expect("send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("json body"))
    }
}
