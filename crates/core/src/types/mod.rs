//! Core types for AgentCart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod sku;

pub use category::{Category, CategoryError};
pub use id::OrderId;
pub use price::{CURRENCY_CODE, Price, PriceError};
pub use sku::{Sku, SkuError};
