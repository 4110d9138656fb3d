use rkn_roulette_domain::DomainError;

/// Local key-value storage holding serialized snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Returns `Ok(None)` when nothing was ever written under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replaces the whole value under `key`. Readers never observe a partial value.
    fn write(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
