//! RKN Roulette Domain Layer
pub mod blocked_entry;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod export;
pub mod notification;
pub mod registry_stats;
pub mod service_record;
pub mod wheel;

pub use blocked_entry::BlockedEntry;
pub use catalog::Catalog;
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use export::ExportArtifact;
pub use notification::{Notification, Severity};
pub use registry_stats::RegistryStats;
pub use service_record::{ServiceId, ServiceRecord};
pub use wheel::{SpinPlan, WheelLayout, WheelSegment};
