//! Application state shared across handlers.

use std::sync::Arc;

use agentcart_core::{Catalog, CatalogError, OrderSynthesizer};

use crate::config::StorefrontConfig;
use crate::discovery::DiscoveryDocuments;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// immutable catalog, the order synthesizer and the rendered discovery
/// documents.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    synthesizer: OrderSynthesizer,
    discovery: DiscoveryDocuments,
}

impl AppState {
    /// Create a new application state, loading the configured catalog.
    ///
    /// Uses the built-in demo catalog unless `catalog_path` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin(),
        };

        Ok(Self::from_parts(config, catalog))
    }

    /// Create application state around an already-built catalog.
    #[must_use]
    pub fn from_parts(config: StorefrontConfig, catalog: Catalog) -> Self {
        let synthesizer = OrderSynthesizer::new(config.delivery_days);
        let discovery = DiscoveryDocuments::render(&catalog, &config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                synthesizer,
                discovery,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn synthesizer(&self) -> &OrderSynthesizer {
        &self.inner.synthesizer
    }

    /// Get the pre-rendered discovery documents.
    #[must_use]
    pub fn discovery(&self) -> &DiscoveryDocuments {
        &self.inner.discovery
    }
}
