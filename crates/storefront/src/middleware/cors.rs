//! CORS policy for the agent-facing API.
//!
//! Agents running in a browser sandbox call the API and fetch discovery
//! documents from other origins. Nothing is authenticated by cookie, so the
//! policy allows any origin without credentials.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// How long browsers may cache a preflight answer.
const PREFLIGHT_MAX_AGE_SECS: u64 = 3600;

/// CORS layer allowing any origin to `GET` and `POST` JSON.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}
