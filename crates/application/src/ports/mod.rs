mod catalog_source;
mod clock;
mod notifier;
mod random_source;
mod render_sink;
mod snapshot_store;

pub use catalog_source::CatalogSource;
pub use clock::Clock;
pub use notifier::Notifier;
pub use random_source::RandomSource;
pub use render_sink::{RegistryFrame, RenderSink};
pub use snapshot_store::SnapshotStore;
