use crate::service_record::ServiceId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid service id: {0}")]
    InvalidServiceId(ServiceId),

    #[error("Duplicate service id in catalog: {0}")]
    DuplicateServiceId(ServiceId),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to read snapshot slot {slot}: {reason}")]
    SnapshotRead { slot: String, reason: String },

    #[error("Failed to write snapshot slot {slot}: {reason}")]
    SnapshotWrite { slot: String, reason: String },

    #[error("Malformed snapshot: {0}")]
    SnapshotFormat(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
