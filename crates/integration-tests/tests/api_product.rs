//! Integration tests for `GET /api/product`.

#![allow(clippy::unwrap_used)]

use agentcart_integration_tests::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_product_found_any_case() {
    let ctx = TestContext::new().await;

    for sku in ["HAT-RED-002", "hat-red-002", "Hat-Red-002"] {
        let (status, body) = ctx.get_json(&format!("/api/product?sku={sku}")).await;
        assert_eq!(status, 200, "{sku}");
        assert_eq!(body["success"], true);
        assert_eq!(body["product"]["sku"], "HAT-RED-002");
        assert_eq!(body["product"]["sizes"], json!(["OS"]));
        assert_eq!(body["product"]["inventory"]["OS"], 150);
    }
}

#[tokio::test]
async fn test_product_not_found() {
    let ctx = TestContext::new().await;
    let (status, body) = ctx.get_json("/api/product?sku=INVALID-SKU").await;

    assert_eq!(status, 404);
    assert_eq!(body, json!({"success": false, "error": "Product not found"}));
}

#[tokio::test]
async fn test_product_missing_sku() {
    let ctx = TestContext::new().await;

    for path in ["/api/product", "/api/product?sku="] {
        let (status, body) = ctx.get_json(path).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(body["error"], "SKU parameter is required");
    }
}
