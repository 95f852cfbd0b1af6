//! Catalog search handlers.

use agentcart_core::{SearchFilters, SearchQuery, SearchResults, search};
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderName, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Search response, by API version.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// Legacy shape: bare `{results, count}`.
    V1(SearchResults),
    /// Canonical shape: `{success, results, count}`.
    V2 {
        success: bool,
        #[serde(flatten)]
        results: SearchResults,
    },
}

/// Query string as ordered pairs, so a repeated key is not a rejection.
type QueryPairs = Query<Vec<(String, String)>>;

/// `GET /api/search`: filter the catalog.
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Json<SearchResponse> {
    let query: SearchQuery = pairs.into_iter().collect();
    let filters = SearchFilters::from_query(&query);
    let results = search(state.catalog(), &filters);
    tracing::debug!(count = results.count, "Search complete");

    Json(SearchResponse::V2 {
        success: true,
        results,
    })
}

/// `GET /api/v1/search`: deprecated search.
///
/// Free text only looks at name and description, category and color are
/// ignored, and the response has no `success` flag.
#[instrument(skip(state))]
pub async fn legacy_search(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Response {
    let query: SearchQuery = pairs.into_iter().collect();
    let results = search(state.catalog(), &SearchFilters::legacy(&query));

    (
        [
            (HeaderName::from_static("deprecation"), "true"),
            (header::LINK, r#"</api/search>; rel="successor-version""#),
        ],
        Json(SearchResponse::V1(results)),
    )
        .into_response()
}
