//! Product lookup by SKU.

use thiserror::Error;

use crate::catalog::{Catalog, Product};

/// Why a lookup produced no product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No SKU was supplied, or it was empty.
    #[error("SKU parameter is required")]
    MissingSku,
    /// The SKU matches no product.
    #[error("Product not found")]
    NotFound(String),
}

/// Look up a product by SKU, ignoring case.
///
/// A missing or empty SKU is reported separately from an unknown one so
/// callers can map the two to different statuses.
///
/// # Errors
///
/// Returns [`LookupError::MissingSku`] or [`LookupError::NotFound`].
pub fn lookup<'a>(catalog: &'a Catalog, sku: Option<&str>) -> Result<&'a Product, LookupError> {
    let sku = sku
        .filter(|s| !s.trim().is_empty())
        .ok_or(LookupError::MissingSku)?;

    catalog
        .find(sku)
        .ok_or_else(|| LookupError::NotFound(sku.to_string()))
}
