//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (catalog loaded)
//!
//! # Discovery
//! GET  /.well-known/agent-store.json  - Store, catalog and API description
//! GET  /.well-known/agent.json        - Compact agent manifest
//! GET  /robots.txt                    - Crawler rules and agent hints
//!
//! # API (also served under /api/v2)
//! GET  /api/search                    - Search and filter products
//! GET  /api/product?sku=              - Product details
//! POST /api/buy                       - Place an order
//!
//! # Legacy API
//! GET  /api/v1/search                 - Deprecated search shape
//! ```

pub mod api;
pub mod discovery;
pub mod health;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::discovery::{AGENT_MANIFEST_PATH, AGENT_STORE_PATH};
use crate::error::AppError;
use crate::state::AppState;

/// Create the canonical API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(api::search::search_products))
        .route("/product", get(api::product::product))
        .route("/buy", post(api::buy::buy))
}

/// Create the legacy API routes router.
pub fn legacy_api_routes() -> Router<AppState> {
    Router::new().route("/search", get(api::search::legacy_search))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Discovery
        .route(AGENT_STORE_PATH, get(discovery::agent_store))
        .route(AGENT_MANIFEST_PATH, get(discovery::agent_manifest))
        .route("/robots.txt", get(discovery::robots))
        // API
        .nest("/api/v1", legacy_api_routes())
        .nest("/api/v2", api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
