use rkn_roulette_domain::{Catalog, DomainError};

pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog, DomainError>;
}
