//! Discovery document route handlers.
//!
//! Bodies are rendered once at startup (see [`crate::discovery`]) and served
//! with a short public cache lifetime.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

const DISCOVERY_CACHE_CONTROL: &str = "public, max-age=300";

fn cached(content_type: &'static str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, DISCOVERY_CACHE_CONTROL),
        ],
        body,
    )
        .into_response()
}

/// Serve `/.well-known/agent-store.json`.
pub async fn agent_store(State(state): State<AppState>) -> Response {
    cached("application/json", state.discovery().agent_store.clone())
}

/// Serve `/.well-known/agent.json`.
pub async fn agent_manifest(State(state): State<AppState>) -> Response {
    cached("application/json", state.discovery().agent_manifest.clone())
}

/// Serve `/robots.txt`.
pub async fn robots(State(state): State<AppState>) -> Response {
    cached("text/plain; charset=utf-8", state.discovery().robots.clone())
}
