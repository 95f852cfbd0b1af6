//! Product lookup handler.

use agentcart_core::{Product, lookup};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// `GET /api/product?sku=`: full details for one product.
///
/// Only the first `sku` parameter counts.
#[instrument(skip(state))]
pub async fn product(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ProductResponse>> {
    let sku = pairs
        .iter()
        .find(|(key, _)| key == "sku")
        .map(|(_, value)| value.as_str());
    let product = lookup(state.catalog(), sku)?;

    Ok(Json(ProductResponse {
        success: true,
        product: product.clone(),
    }))
}
