//! AgentCart Core - catalog, search and order validation.
//!
//! This crate holds the domain logic shared by:
//! - `storefront` - Public JSON API and agent discovery documents
//! - `cli` - Operator tooling for catalogs and discovery files
//!
//! # Architecture
//!
//! The core crate performs no I/O beyond optionally reading a catalog file at
//! start-up. The catalog is immutable once built, so every operation here is a
//! pure function of the catalog and its input and is safe to call from any
//! number of request handlers at once.
//!
//! # Modules
//!
//! - [`types`] - Newtypes for SKUs, categories, prices and order IDs
//! - [`catalog`] - The product list and its invariants
//! - [`search`] - Free-text, category, color and price filtering
//! - [`lookup`] - Case-insensitive retrieval by SKU
//! - [`order`] - Purchase validation and order confirmation synthesis

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod lookup;
pub mod order;
pub mod search;
pub mod types;

pub use catalog::{Catalog, CatalogError, Product};
pub use lookup::{LookupError, lookup};
pub use order::{
    OrderConfirmation, OrderError, OrderStatus, OrderSynthesizer, PurchaseRequest,
    ValidatedPurchase, validate,
};
pub use search::{SearchFilters, SearchQuery, SearchResults, TextScope, search};
pub use types::*;
