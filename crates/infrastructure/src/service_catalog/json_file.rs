use rkn_roulette_application::ports::CatalogSource;
use rkn_roulette_domain::{Catalog, DomainError};
use std::path::PathBuf;
use tracing::{info, instrument};

use super::parse_catalog;

/// Catalog read from a user-supplied JSON file.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Catalog, DomainError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to read catalog {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let catalog = parse_catalog(&json)?;
        info!(services = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }
}
