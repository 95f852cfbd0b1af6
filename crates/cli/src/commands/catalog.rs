//! Catalog commands.

use std::path::Path;

use super::{CommandError, load_catalog};

/// Render a catalog as pretty JSON.
pub fn export(path: Option<&Path>) -> Result<String, CommandError> {
    let catalog = load_catalog(path)?;
    Ok(serde_json::to_string_pretty(catalog.products())?)
}

/// Validate a catalog file and summarize it.
pub fn validate(path: &Path) -> Result<String, CommandError> {
    let catalog = agentcart_core::Catalog::from_path(path)?;
    let categories: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();

    tracing::info!(path = %path.display(), products = catalog.len(), "Catalog is valid");
    Ok(format!(
        "{}: {} products ({})",
        path.display(),
        catalog.len(),
        categories.join(", ")
    ))
}
