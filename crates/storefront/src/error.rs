//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that logs each failure at a level
//! matching who caused it before responding to the client. All API handlers
//! return `Result<T, AppError>`, and every error body has the same JSON shape:
//!
//! ```json
//! { "success": false, "error": "Invalid size", "available_sizes": ["S", "M"] }
//! ```

use agentcart_core::{LookupError, OrderError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Purchase rejected by validation.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Product lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Purchase body was not a JSON object of the expected shape.
    #[error("Malformed request body: {0}")]
    MalformedRequestBody(String),

    /// No route or resource at this path.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// JSON error body shared by every API endpoint.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_sizes: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    available_quantity: Option<u32>,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Order(_) | Self::Lookup(LookupError::MissingSku) => StatusCode::BAD_REQUEST,
            Self::Lookup(LookupError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedRequestBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    fn public_message(&self) -> String {
        match self {
            // Don't expose parser details to clients
            Self::MalformedRequestBody(_) => "Failed to process order".to_string(),
            Self::NotFound(_) => "Not found".to_string(),
            Self::Order(err) => err.to_string(),
            Self::Lookup(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::MalformedRequestBody(detail) => {
                tracing::warn!(detail = %detail, "Rejected malformed purchase body");
            }
            Self::Order(err) => {
                tracing::debug!(reason = %err, "Purchase rejected");
            }
            Self::Lookup(_) | Self::NotFound(_) => {}
        }

        let (available_sizes, available_quantity) = match &self {
            Self::Order(err) => (err.available_sizes(), err.available_quantity()),
            _ => (None, None),
        };

        let body = ErrorBody {
            success: false,
            error: self.public_message(),
            available_sizes,
            available_quantity,
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for shopper actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("order", "Order confirmed", Some(&[("sku", "HAT-RED-002")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::Order(OrderError::InvalidQuantity)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Lookup(LookupError::MissingSku)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Lookup(LookupError::NotFound("X".to_string()))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::NotFound("/nope".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::MalformedRequestBody("eof".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_size_error_lists_sizes() {
        let err = OrderError::InvalidSize {
            available_sizes: vec!["S".to_string(), "M".to_string()],
        };
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid size");
        assert_eq!(body["available_sizes"], serde_json::json!(["S", "M"]));
        assert!(body.get("available_quantity").is_none());
    }

    #[tokio::test]
    async fn test_inventory_error_reports_quantity() {
        let err = OrderError::InsufficientInventory {
            available_quantity: 15,
        };
        let (_, body) = body_json(err.into()).await;
        assert_eq!(body["error"], "Insufficient inventory");
        assert_eq!(body["available_quantity"], 15);
        assert!(body.get("available_sizes").is_none());
    }

    #[tokio::test]
    async fn test_parser_details_are_hidden() {
        let (_, body) = body_json(AppError::MalformedRequestBody(
            "expected value at line 1 column 1".to_string(),
        ))
        .await;
        assert_eq!(body["error"], "Failed to process order");
    }

    #[tokio::test]
    async fn test_lookup_messages() {
        let (_, body) = body_json(LookupError::MissingSku.into()).await;
        assert_eq!(body["error"], "SKU parameter is required");

        let (_, body) = body_json(LookupError::NotFound("X".to_string()).into()).await;
        assert_eq!(body["error"], "Product not found");
    }
}
