mod json_file;

pub use json_file::JsonFileCatalog;

use rkn_roulette_application::ports::CatalogSource;
use rkn_roulette_domain::{Catalog, DomainError, ServiceRecord};
use tracing::debug;

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Built-in service catalog compiled from catalog.json.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, DomainError> {
        let catalog = parse_catalog(EMBEDDED_CATALOG)?;
        debug!(services = catalog.len(), "Embedded catalog loaded");
        Ok(catalog)
    }
}

/// Parses a JSON array of service records. Ids must be unique and non-zero.
pub fn parse_catalog(json: &str) -> Result<Catalog, DomainError> {
    let services: Vec<ServiceRecord> =
        serde_json::from_str(json).map_err(|e| DomainError::InvalidCatalog(e.to_string()))?;
    Catalog::new(services)
}
