use rkn_roulette_domain::export::export_file_name;
use rkn_roulette_domain::{
    BlockedEntry, Catalog, DomainError, ExportArtifact, Notification, RegistryStats, ServiceId,
    ServiceRecord, Severity,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::snapshot_codec;
use crate::ports::{Clock, Notifier, RegistryFrame, RenderSink, SnapshotStore};

/// Sole owner of the catalog and of the list of blocked services.
///
/// Every mutator runs validate, mutate, persist, recompute and notify in that
/// order. A rejected call changes nothing, writes nothing and triggers no
/// render. A successful call triggers exactly one render.
///
/// Mutators return `Ok(false)` for rejected input. `Err` is reserved for a
/// failed snapshot write: the in-memory change is kept and
/// [`Registry::is_persisted`] reports `false` until a later write succeeds.
///
/// Permanently deleted ids live in a second slot, `<slot>_deleted`, and are
/// taken out of the catalog on every load.
pub struct Registry {
    catalog: Catalog,
    blocked: Vec<BlockedEntry>,
    deleted: Vec<ServiceId>,
    available: Vec<ServiceRecord>,
    stats: RegistryStats,
    persisted: bool,
    slot: String,
    deleted_slot: String,
    store: Arc<dyn SnapshotStore>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    renderer: Arc<dyn RenderSink>,
}

impl Registry {
    /// Restores the blocked list from `slot` and drops previously deleted
    /// services from `catalog`. An absent, unreadable or malformed snapshot
    /// yields an empty registry.
    #[instrument(skip_all, fields(slot = %slot.as_ref()))]
    pub fn load(
        mut catalog: Catalog,
        slot: impl AsRef<str>,
        store: Arc<dyn SnapshotStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        renderer: Arc<dyn RenderSink>,
    ) -> Self {
        let slot = slot.as_ref().to_string();
        let deleted_slot = snapshot_codec::deleted_slot(&slot);

        let deleted = match store.read(&deleted_slot) {
            Ok(Some(raw)) => snapshot_codec::decode_ids(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring malformed list of deleted services");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read deleted services");
                Vec::new()
            }
        };
        for id in &deleted {
            catalog.remove(*id);
        }

        let blocked = match store.read(&slot) {
            Ok(Some(raw)) => match snapshot_codec::decode(&raw) {
                Ok(entries) => snapshot_codec::sanitize(entries, &catalog),
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed registry snapshot");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No registry snapshot found, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read registry snapshot, starting empty");
                Vec::new()
            }
        };

        let mut registry = Self {
            catalog,
            blocked,
            deleted,
            available: Vec::new(),
            stats: RegistryStats::default(),
            persisted: true,
            slot,
            deleted_slot,
            store,
            clock,
            notifier,
            renderer,
        };
        registry.refresh();

        info!(
            blocked = registry.blocked.len(),
            total = registry.catalog.len(),
            deleted = registry.deleted.len(),
            "Registry loaded"
        );

        registry
    }

    #[instrument(skip(self, service), fields(service_id = service.id))]
    pub fn add(&mut self, service: &ServiceRecord) -> Result<bool, DomainError> {
        if !service.has_valid_id() {
            warn!("Rejected service without id");
            return Ok(false);
        }

        let Some(record) = self.catalog.get_by_id(service.id) else {
            warn!("Rejected service missing from catalog");
            return Ok(false);
        };

        if self.is_blocked(record.id) {
            self.notify(format!("{} is already blocked", record.name), Severity::Warning);
            return Ok(false);
        }

        let entry = BlockedEntry::from_service(record, self.clock.local_now());
        let name = Arc::clone(&entry.name);
        self.blocked.insert(0, entry);

        let persisted = self.persist();
        self.refresh();

        info!(blocked = self.blocked.len(), "Service blocked");
        self.notify(format!("{} added to the registry", name), Severity::Danger);

        persisted.map(|_| true)
    }

    /// Unban: the service goes back to the available pool.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: ServiceId) -> Result<bool, DomainError> {
        let Some(idx) = self.position_of(id) else {
            debug!("Unban ignored, service is not blocked");
            return Ok(false);
        };

        let entry = self.blocked.remove(idx);

        let persisted = self.persist();
        self.refresh();

        info!(blocked = self.blocked.len(), "Service unbanned");
        self.notify(
            format!("{} removed from the registry", entry.name),
            Severity::Warning,
        );

        persisted.map(|_| true)
    }

    /// Removes the service from the catalog for good, and from the blocked
    /// list if it is there. A later [`Registry::add`] of the same id is
    /// rejected as unknown.
    #[instrument(skip(self, service), fields(service_id = service.id))]
    pub fn permanently_delete(&mut self, service: &ServiceRecord) -> Result<bool, DomainError> {
        if !service.has_valid_id() {
            warn!("Rejected deletion of service without id");
            return Ok(false);
        }

        let Some(removed) = self.catalog.remove(service.id) else {
            debug!("Deletion ignored, service is not in catalog");
            return Ok(false);
        };

        let was_blocked = match self.position_of(removed.id) {
            Some(idx) => {
                self.blocked.remove(idx);
                true
            }
            None => false,
        };
        self.deleted.push(removed.id);

        let tombstoned = self.persist_deleted();
        let persisted = self.persist();
        let persisted = tombstoned.and(persisted);
        self.persisted = persisted.is_ok();
        self.refresh();

        info!(
            was_blocked = was_blocked,
            total = self.catalog.len(),
            "Service permanently deleted"
        );
        self.notify(
            format!("{} permanently deleted from the system", removed.name),
            Severity::Success,
        );

        persisted.map(|_| true)
    }

    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<bool, DomainError> {
        if self.blocked.is_empty() {
            self.notify("Registry is already empty", Severity::Warning);
            return Ok(false);
        }

        let cleared = self.blocked.len();
        self.blocked.clear();

        let persisted = self.persist();
        self.refresh();

        info!(cleared = cleared, "Registry cleared");
        self.notify("Registry cleared", Severity::Danger);

        persisted.map(|_| true)
    }

    /// Pretty-printed snapshot of the blocked list, named after today's UTC date.
    /// Returns `Ok(None)` when there is nothing to export. Saving the artifact
    /// is up to the caller.
    #[instrument(skip(self))]
    pub fn export(&self) -> Result<Option<ExportArtifact>, DomainError> {
        if self.blocked.is_empty() {
            self.notify("Registry is empty", Severity::Warning);
            return Ok(None);
        }

        let contents = snapshot_codec::encode_pretty(&self.blocked)?;
        let file_name = export_file_name(self.clock.utc_today());

        info!(
            file_name = %file_name,
            entries = self.blocked.len(),
            "Registry export prepared"
        );
        self.notify("Registry export prepared", Severity::Primary);

        Ok(Some(ExportArtifact {
            file_name,
            contents,
        }))
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    /// Newest first.
    pub fn blocked(&self) -> &[BlockedEntry] {
        &self.blocked
    }

    /// Catalog entries that are not blocked, in catalog order.
    pub fn available(&self) -> &[ServiceRecord] {
        &self.available
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_blocked(&self, id: ServiceId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn find_available(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.available.iter().find(|s| s.id == id)
    }

    /// Ids removed from the system, oldest first.
    pub fn deleted_ids(&self) -> &[ServiceId] {
        &self.deleted
    }

    /// `false` while the latest snapshot write has failed.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn position_of(&self, id: ServiceId) -> Option<usize> {
        self.blocked.iter().position(|e| e.id == id)
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        let result = snapshot_codec::encode(&self.blocked)
            .and_then(|raw| self.store.write(&self.slot, &raw));
        let result = Self::settle_write(&self.slot, result);
        self.persisted = result.is_ok();
        result
    }

    fn persist_deleted(&self) -> Result<(), DomainError> {
        let result = snapshot_codec::encode_ids(&self.deleted)
            .and_then(|raw| self.store.write(&self.deleted_slot, &raw));
        Self::settle_write(&self.deleted_slot, result)
    }

    fn settle_write(slot: &str, result: Result<(), DomainError>) -> Result<(), DomainError> {
        result.map_err(|e| {
            error!(error = %e, slot = %slot, "Failed to persist registry snapshot");
            match e {
                DomainError::SnapshotWrite { .. } => e,
                other => DomainError::SnapshotWrite {
                    slot: slot.to_string(),
                    reason: other.to_string(),
                },
            }
        })
    }

    fn refresh(&mut self) {
        self.available = self
            .catalog
            .all()
            .iter()
            .filter(|s| !self.blocked.iter().any(|b| b.id == s.id))
            .cloned()
            .collect();
        self.stats = RegistryStats::compute(self.blocked.len(), self.catalog.len());

        self.renderer.state_changed(&RegistryFrame {
            blocked: &self.blocked,
            available: &self.available,
            stats: self.stats,
        });
    }

    fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(&Notification::new(message, severity));
    }
}
