pub mod catalog;
pub mod errors;
pub mod export;
pub mod logging;
pub mod root;
pub mod storage;

pub use catalog::CatalogConfig;
pub use errors::ConfigError;
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
