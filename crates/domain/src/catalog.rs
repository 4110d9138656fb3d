use rustc_hash::FxHashMap;

use crate::errors::DomainError;
use crate::service_record::{ServiceId, ServiceRecord};

/// The set of services known to the system, in presentation order.
///
/// Ids are unique and non-zero. The only mutation is [`Catalog::remove`],
/// which backs permanent deletion.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    by_id: FxHashMap<ServiceId, usize>,
}

impl Catalog {
    pub fn new(services: Vec<ServiceRecord>) -> Result<Self, DomainError> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(services.len());

        for (idx, service) in services.iter().enumerate() {
            if !service.has_valid_id() {
                return Err(DomainError::InvalidServiceId(service.id));
            }
            if by_id.insert(service.id, idx).is_some() {
                return Err(DomainError::DuplicateServiceId(service.id));
            }
        }

        Ok(Self { services, by_id })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get_by_id(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.by_id.get(&id).map(|&idx| &self.services[idx])
    }

    pub fn contains(&self, id: ServiceId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn all(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn ids(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.services.iter().map(|s| s.id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn remove(&mut self, id: ServiceId) -> Option<ServiceRecord> {
        let idx = self.by_id.remove(&id)?;
        let removed = self.services.remove(idx);

        for (pos, service) in self.services.iter().enumerate().skip(idx) {
            self.by_id.insert(service.id, pos);
        }

        Some(removed)
    }
}
