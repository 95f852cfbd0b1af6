//! Purchase handler.

use agentcart_core::{OrderConfirmation, PurchaseRequest, validate};
use axum::{
    Extension, Json,
    body::Bytes,
    extract::State,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequestId;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BuyResponse {
    pub success: bool,
    #[serde(flatten)]
    pub order: OrderConfirmation,
}

/// `POST /api/buy`: validate a purchase and confirm it.
///
/// The body is parsed by hand rather than through the `Json` extractor so
/// that a malformed body gets the API's own error shape.
#[instrument(skip_all)]
pub async fn buy(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Json<BuyResponse>> {
    let request: PurchaseRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequestBody(e.to_string()))?;

    let purchase = validate(state.catalog(), &request)?;
    let order = state.synthesizer().confirm(&purchase);

    tracing::info!(
        order_id = %order.order_id,
        sku = %order.sku,
        qty = order.qty,
        size = %order.size,
        total_price = order.total_price,
        "Order confirmed"
    );
    add_breadcrumb(
        "order",
        "Order confirmed",
        Some(&[
            ("order_id", order.order_id.as_str()),
            ("sku", order.sku.as_str()),
            ("request_id", request_id.as_str()),
        ]),
    );

    Ok(Json(BuyResponse {
        success: true,
        order,
    }))
}
