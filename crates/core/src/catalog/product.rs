//! The product record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, Sku};

/// A product offered by the store.
///
/// `inventory` is keyed by size label and holds exactly the labels in `sizes`;
/// [`Catalog::new`](super::Catalog::new) rejects products where the two
/// disagree. Inventory is informational: purchases check it but never
/// decrement it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: Category,
    pub color: String,
    /// Size labels in display order. A single entry (usually `"OS"`) means one size fits all.
    pub sizes: Vec<String>,
    pub inventory: BTreeMap<String, u32>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl Product {
    /// Whether the product comes in a single size and needs no size selection.
    #[must_use]
    pub const fn is_one_size(&self) -> bool {
        self.sizes.len() == 1
    }

    /// The sole size of a one-size product.
    #[must_use]
    pub fn sole_size(&self) -> Option<&str> {
        match self.sizes.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Find the catalog's own label for `size`, ignoring ASCII case.
    #[must_use]
    pub fn size_label(&self, size: &str) -> Option<&str> {
        let size = size.trim();
        self.sizes
            .iter()
            .find(|s| s.eq_ignore_ascii_case(size))
            .map(String::as_str)
    }

    /// Units in stock for an exact size label; zero for unknown sizes.
    #[must_use]
    pub fn stock(&self, size: &str) -> u32 {
        self.inventory.get(size).copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::Catalog;

    #[test]
    fn test_size_label_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hoodie = catalog.find("HOODIE-BLACK-001").unwrap();
        assert_eq!(hoodie.size_label("xl"), Some("XL"));
        assert_eq!(hoodie.size_label(" L "), Some("L"));
        assert_eq!(hoodie.size_label("XS"), None);
    }

    #[test]
    fn test_sole_size() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("HAT-BLACK-001").unwrap().sole_size(), Some("OS"));
        assert_eq!(catalog.find("SHOES-RED-003").unwrap().sole_size(), None);
    }

    #[test]
    fn test_stock() {
        let catalog = Catalog::builtin();
        let navy = catalog.find("HOODIE-NAVY-003").unwrap();
        assert_eq!(navy.stock("L"), 25);
        assert_eq!(navy.stock("S"), 0);
    }

    #[test]
    fn test_features_omitted_when_absent() {
        let mut product = Catalog::builtin().find("HAT-RED-002").unwrap().clone();
        product.features = None;
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("features").is_none());
        assert_eq!(json["price"], 20);
        assert_eq!(json["category"], "hat");
    }
}
