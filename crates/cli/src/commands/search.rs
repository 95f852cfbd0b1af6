//! Offline catalog search.

use std::path::Path;

use agentcart_core::{SearchFilters, SearchQuery, search};
use agentcart_storefront::routes::api::search::SearchResponse;

use super::{CommandError, load_catalog};

/// Search the catalog and render the canonical API response.
pub fn run(query: &SearchQuery, catalog: Option<&Path>) -> Result<String, CommandError> {
    let catalog = load_catalog(catalog)?;
    let results = search(&catalog, &SearchFilters::from_query(query));

    Ok(serde_json::to_string_pretty(&SearchResponse::V2 {
        success: true,
        results,
    })?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_api_shape() {
        let query = SearchQuery {
            category: Some("shoes".to_string()),
            min_price: Some("100".to_string()),
            ..SearchQuery::default()
        };
        let out: serde_json::Value = serde_json::from_str(&run(&query, None).unwrap()).unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["count"], 2);
        assert_eq!(out["results"][0]["sku"], "SHOES-BLACK-001");
    }
}
