//! The product catalog.
//!
//! A [`Catalog`] is built once at start-up, either from the built-in demo
//! data or from a JSON file, and is immutable afterwards. Cloning is cheap
//! (the products live behind an `Arc`), so request handlers share one
//! instance without locking.
//!
//! # Invariants
//!
//! Enforced by [`Catalog::new`]:
//! - SKUs are unique (they are canonical upper-case, so uniqueness is
//!   case-insensitive)
//! - every product has at least one size, with no duplicate labels
//! - inventory keys are exactly the product's sizes
//! - prices are positive (enforced by [`Price`](crate::Price) itself)

mod builtin;
mod product;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub use product::Product;

use crate::types::{Category, Sku};

/// Reasons a catalog cannot be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate SKU: {0}")]
    DuplicateSku(Sku),

    #[error("product {0} has no sizes")]
    NoSizes(Sku),

    #[error("product {sku} lists size {size:?} more than once")]
    DuplicateSize { sku: Sku, size: String },

    #[error("product {sku} has no inventory entry for size {size:?}")]
    MissingInventory { sku: Sku, size: String },

    #[error("product {sku} has inventory for unknown size {size:?}")]
    UnknownInventorySize { sku: Sku, size: String },

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The immutable set of products offered by the store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.sku) {
                return Err(CatalogError::DuplicateSku(product.sku.clone()));
            }
            check_sizes(product)?;
        }

        Ok(Self {
            products: products.into(),
        })
    }

    /// The nine-product demo catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: builtin::products().into(),
        }
    }

    /// Parse a JSON array of products and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON or field values
    /// (zero prices, unknown categories, bad SKUs), or any invariant error.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Read and validate a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise as
    /// [`Catalog::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by SKU, ignoring case.
    ///
    /// Inputs that cannot be a SKU at all simply find nothing.
    #[must_use]
    pub fn find(&self, sku: &str) -> Option<&Product> {
        let sku = Sku::parse(sku).ok()?;
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Distinct categories present, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in self.products.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }
}

fn check_sizes(product: &Product) -> Result<(), CatalogError> {
    if product.sizes.is_empty() {
        return Err(CatalogError::NoSizes(product.sku.clone()));
    }

    let mut sizes = HashSet::with_capacity(product.sizes.len());
    for size in &product.sizes {
        if !sizes.insert(size.as_str()) {
            return Err(CatalogError::DuplicateSize {
                sku: product.sku.clone(),
                size: size.clone(),
            });
        }
        if !product.inventory.contains_key(size) {
            return Err(CatalogError::MissingInventory {
                sku: product.sku.clone(),
                size: size.clone(),
            });
        }
    }

    if let Some(extra) = product
        .inventory
        .keys()
        .find(|size| !sizes.contains(size.as_str()))
    {
        return Err(CatalogError::UnknownInventorySize {
            sku: product.sku.clone(),
            size: extra.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builtin_products() -> Vec<Product> {
        Catalog::builtin().products().to_vec()
    }

    #[test]
    fn test_builtin_satisfies_invariants() {
        let catalog = Catalog::new(builtin_products()).unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_builtin_category_counts() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let count = catalog
                .products()
                .iter()
                .filter(|p| p.category == category)
                .count();
            assert_eq!(count, 3, "{category}");
        }
        assert_eq!(catalog.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_find_any_case() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let lower = product.sku.as_str().to_lowercase();
            assert_eq!(catalog.find(&lower).unwrap().sku, product.sku);
        }
        assert!(catalog.find("INVALID-SKU").is_none());
        assert!(catalog.find("not a sku").is_none());
    }

    #[test]
    fn test_rejects_duplicate_sku() {
        let mut products = builtin_products();
        let mut dup = products[0].clone();
        dup.sku = Sku::parse("hoodie-black-001").unwrap();
        products.push(dup);

        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateSku(sku)) if sku.as_str() == "HOODIE-BLACK-001"
        ));
    }

    #[test]
    fn test_rejects_empty_sizes() {
        let mut products = builtin_products();
        products[3].sizes.clear();
        products[3].inventory.clear();
        assert!(matches!(Catalog::new(products), Err(CatalogError::NoSizes(_))));
    }

    #[test]
    fn test_rejects_inventory_mismatch() {
        let mut products = builtin_products();
        products[0].inventory.remove("XXL");
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::MissingInventory { size, .. }) if size == "XXL"
        ));

        let mut products = builtin_products();
        products[0].inventory.insert("XS".to_string(), 5);
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::UnknownInventorySize { size, .. }) if size == "XS"
        ));
    }

    #[test]
    fn test_rejects_duplicate_size() {
        let mut products = builtin_products();
        products[4].sizes.push("OS".to_string());
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateSize { .. })
        ));
    }

    #[test]
    fn test_from_json_round_trips_builtin() {
        let json = serde_json::to_string(Catalog::builtin().products()).unwrap();
        let catalog = Catalog::from_json_str(&json).unwrap();
        assert_eq!(catalog.products(), Catalog::builtin().products());
    }

    #[test]
    fn test_from_json_canonicalizes_sku() {
        let json = r#"[{
            "sku": "mug-white-001",
            "name": "Mug",
            "price": 12,
            "description": "Ceramic mug",
            "category": "hat",
            "color": "white",
            "sizes": ["OS"],
            "inventory": {"OS": 3},
            "image": "/images/mug.jpg"
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.products()[0].sku.as_str(), "MUG-WHITE-001");
        assert!(catalog.products()[0].features.is_none());
    }

    #[test]
    fn test_from_json_rejects_zero_price() {
        let json = r#"[{
            "sku": "FREE-001", "name": "Free", "price": 0, "description": "x",
            "category": "hat", "color": "red", "sizes": ["OS"],
            "inventory": {"OS": 1}, "image": "/x.jpg"
        }]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
