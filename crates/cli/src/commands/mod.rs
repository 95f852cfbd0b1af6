//! Command implementations.
//!
//! Each command returns its output as a string; `main` prints it.

pub mod catalog;
pub mod discovery;
pub mod search;

use std::path::Path;

use agentcart_core::{Catalog, CatalogError};
use agentcart_storefront::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the catalog at `path`, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    path.map_or_else(|| Ok(Catalog::builtin()), Catalog::from_path)
}
