//! Discovery document rendering for static hosting.

use std::path::Path;

use agentcart_storefront::{config::StorefrontConfig, discovery};

use super::{CommandError, load_catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    AgentStore,
    AgentManifest,
    Robots,
}

/// Render one discovery document exactly as the server would serve it.
///
/// The base URL goes through the same validation as `STOREFRONT_BASE_URL`.
pub fn render(
    document: Document,
    base_url: &str,
    catalog: Option<&Path>,
) -> Result<String, CommandError> {
    let config = StorefrontConfig::from_lookup(|key| {
        (key == "STOREFRONT_BASE_URL").then(|| base_url.to_string())
    })?;
    let catalog = load_catalog(catalog)?;

    Ok(match document {
        Document::AgentStore => {
            serde_json::to_string_pretty(&discovery::agent_store(&catalog, &config))?
        }
        Document::AgentManifest => {
            serde_json::to_string_pretty(&discovery::agent_manifest(&catalog, &config))?
        }
        Document::Robots => discovery::robots_txt(&catalog),
    })
}
