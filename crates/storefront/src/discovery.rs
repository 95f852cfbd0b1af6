//! Agent discovery documents.
//!
//! `/.well-known/agent-store.json`, `/.well-known/agent.json` and `/robots.txt`
//! are rendered from the live catalog and configuration, so the SKUs, prices
//! and endpoint shapes they advertise always match what the API serves.

use agentcart_core::{CURRENCY_CODE, Catalog, Product};
use serde_json::{Value, json};

use crate::config::StorefrontConfig;

/// Path of the primary discovery document.
pub const AGENT_STORE_PATH: &str = "/.well-known/agent-store.json";
/// Path of the compact agent manifest.
pub const AGENT_MANIFEST_PATH: &str = "/.well-known/agent.json";

const STORE_DESCRIPTION: &str = "Demo merch store built for AI shopping agents. \
    Browse hoodies, hats and shoes, then place orders through a small JSON API. \
    No real payments are taken.";

/// Rendered discovery documents, built once at startup.
#[derive(Debug, Clone)]
pub struct DiscoveryDocuments {
    pub agent_store: String,
    pub agent_manifest: String,
    pub robots: String,
}

impl DiscoveryDocuments {
    /// Render every document for `catalog` under `config`.
    #[must_use]
    pub fn render(catalog: &Catalog, config: &StorefrontConfig) -> Self {
        Self {
            agent_store: agent_store(catalog, config).to_string(),
            agent_manifest: agent_manifest(catalog, config).to_string(),
            robots: robots_txt(catalog),
        }
    }
}

/// Product and size used in examples.
///
/// Prefers a product with a real size choice so the purchase example shows
/// the `size` field doing something.
fn example_product(catalog: &Catalog) -> (&str, &str) {
    let product = catalog
        .products()
        .iter()
        .find(|p| !p.is_one_size())
        .or_else(|| catalog.products().first());

    product.map_or(("HOODIE-BLACK-001", "L"), |p: &Product| {
        let size = p.sizes.get(p.sizes.len() / 2).map_or("OS", String::as_str);
        (p.sku.as_str(), size)
    })
}

fn category_names(catalog: &Catalog) -> Vec<&'static str> {
    catalog.categories().iter().map(|c| c.as_str()).collect()
}

/// The `/.well-known/agent-store.json` document.
#[must_use]
pub fn agent_store(catalog: &Catalog, config: &StorefrontConfig) -> Value {
    let (sku, size) = example_product(catalog);
    let buy_example = format!(
        r#"POST /api/buy {{"sku": "{sku}", "qty": 1, "size": "{size}", "pay_token": "demo_token"}}"#
    );

    let products: Vec<Value> = catalog
        .products()
        .iter()
        .map(|p| {
            json!({
                "sku": p.sku,
                "name": p.name,
                "price": p.price,
                "description": p.description,
                "category": p.category,
                "color": p.color,
                "sizes": p.sizes,
            })
        })
        .collect();

    json!({
        "store": config.store_name,
        "description": STORE_DESCRIPTION,
        "currency": CURRENCY_CODE,
        "categories": category_names(catalog),
        "products": products,
        "instructions": {
            "quick_start": [
                "1. Search the catalog with GET /api/search",
                "2. Check sizes and stock with GET /api/product?sku=SKU",
                "3. Place an order with POST /api/buy",
            ],
            "example": buy_example,
        },
        "api": {
            "base_url": config.base_url,
            "endpoints": {
                "search": {
                    "path": "/api/search",
                    "method": "GET",
                    "description": "Search and filter products. All parameters are optional.",
                    "parameters": {
                        "q": "Free text matched against name, description, category and color",
                        "category": "Exact category, one of the store's categories",
                        "color": "Exact color",
                        "min_price": "Minimum price in USD, inclusive",
                        "max_price": "Maximum price in USD, inclusive",
                    },
                    "response": {
                        "success": "boolean",
                        "results": "Product[]",
                        "count": "number",
                    },
                    "example": "GET /api/search?category=hoodie&color=black&max_price=50",
                },
                "product": {
                    "path": "/api/product",
                    "method": "GET",
                    "description": "Full details for one product, including stock per size.",
                    "parameters": {
                        "sku": "Product SKU (required, case-insensitive)",
                    },
                    "response": {
                        "success": "boolean",
                        "product": "Product",
                    },
                    "example": format!("GET /api/product?sku={sku}"),
                },
                "buy": {
                    "path": "/api/buy",
                    "method": "POST",
                    "description": "Place an order. Send a JSON body.",
                    "required_fields": {
                        "sku": "Product SKU",
                        "qty": "Quantity, a whole number of at least 1",
                        "pay_token": "Payment token (any non-empty string in this demo)",
                    },
                    "optional_fields": {
                        "size": "Size label; required unless the product is one size",
                        "email": "Address for the order confirmation",
                    },
                    "response": {
                        "success": "boolean",
                        "order_id": "string",
                        "total_price": "number",
                        "delivery_date": "YYYY-MM-DD",
                    },
                    "example": buy_example,
                },
            },
            "error_format": {
                "success": false,
                "error": "Human-readable reason; size and stock errors add available_sizes or available_quantity",
            },
        },
    })
}

/// The compact `/.well-known/agent.json` manifest.
#[must_use]
pub fn agent_manifest(catalog: &Catalog, config: &StorefrontConfig) -> Value {
    let base = &config.base_url;

    json!({
        "name": config.store_name,
        "description": STORE_DESCRIPTION,
        "url": base,
        "discovery": format!("{base}{AGENT_STORE_PATH}"),
        "currency": CURRENCY_CODE,
        "categories": category_names(catalog),
        "endpoints": [
            { "method": "GET", "url": format!("{base}/api/search") },
            { "method": "GET", "url": format!("{base}/api/product") },
            { "method": "POST", "url": format!("{base}/api/buy") },
        ],
    })
}

/// The `/robots.txt` body, with a comment block for agents.
#[must_use]
pub fn robots_txt(catalog: &Catalog) -> String {
    let (sku, size) = example_product(catalog);
    let categories = category_names(catalog).join(", ");

    format!(
        "User-agent: *\n\
         Allow: /\n\
         Allow: {AGENT_STORE_PATH}\n\
         Allow: {AGENT_MANIFEST_PATH}\n\
         Allow: /api/search\n\
         Allow: /api/product\n\
         Allow: /api/buy\n\
         \n\
         # AI Agent Instructions\n\
         # Start here: {AGENT_STORE_PATH}\n\
         #\n\
         # Categories: {categories}\n\
         #\n\
         # Examples:\n\
         #   GET /api/search?q=hoodie&max_price=50\n\
         #   GET /api/product?sku={sku}\n\
         #   POST /api/buy {{\"sku\": \"{sku}\", \"qty\": 1, \"size\": \"{size}\", \"pay_token\": \"demo_token\"}}\n"
    )
}
