use rkn_roulette_domain::{BlockedEntry, Catalog, DomainError, ServiceId};
use std::collections::HashSet;
use tracing::warn;

/// Compact form written to the storage slot.
pub fn encode(entries: &[BlockedEntry]) -> Result<String, DomainError> {
    serde_json::to_string(entries).map_err(|e| DomainError::SnapshotFormat(e.to_string()))
}

/// Two-space indented form offered for download.
pub fn encode_pretty(entries: &[BlockedEntry]) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec_pretty(entries).map_err(|e| DomainError::ExportFailed(e.to_string()))
}

pub fn decode(raw: &str) -> Result<Vec<BlockedEntry>, DomainError> {
    // an empty slot may hold a literal `null`
    if raw.trim() == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| DomainError::SnapshotFormat(e.to_string()))
}

/// Slot holding the ids removed from the catalog for good.
pub fn deleted_slot(slot: &str) -> String {
    format!("{}_deleted", slot)
}

pub fn encode_ids(ids: &[ServiceId]) -> Result<String, DomainError> {
    serde_json::to_string(ids).map_err(|e| DomainError::SnapshotFormat(e.to_string()))
}

pub fn decode_ids(raw: &str) -> Result<Vec<ServiceId>, DomainError> {
    if raw.trim() == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| DomainError::SnapshotFormat(e.to_string()))
}

/// Drops entries that would break id uniqueness or point outside the catalog.
///
/// The first occurrence of an id wins since entries are stored newest first.
pub fn sanitize(entries: Vec<BlockedEntry>, catalog: &Catalog) -> Vec<BlockedEntry> {
    let mut seen: HashSet<ServiceId> = HashSet::with_capacity(entries.len());
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        if !catalog.contains(entry.id) {
            warn!(service_id = entry.id, "Dropping snapshot entry missing from catalog");
            continue;
        }
        if !seen.insert(entry.id) {
            warn!(service_id = entry.id, "Dropping duplicate snapshot entry");
            continue;
        }
        kept.push(entry);
    }

    kept
}
