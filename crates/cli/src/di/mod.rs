use rkn_roulette_application::ports::CatalogSource;
use rkn_roulette_application::services::Registry;
use rkn_roulette_application::use_cases::SpinWheelUseCase;
use rkn_roulette_domain::config::CatalogConfig;
use rkn_roulette_domain::{Catalog, Config};
use rkn_roulette_infrastructure::export::FileExportWriter;
use rkn_roulette_infrastructure::notifications::TracingNotifier;
use rkn_roulette_infrastructure::repositories::FileSnapshotStore;
use rkn_roulette_infrastructure::service_catalog::{EmbeddedCatalog, JsonFileCatalog};
use rkn_roulette_infrastructure::system::{FastRandom, SystemClock};
use std::sync::Arc;
use tracing::info;

use crate::console::{ConsoleNotifier, ConsoleRenderer};

/// Everything a command needs, wired once at startup.
pub struct App {
    pub registry: Registry,
    pub spin: SpinWheelUseCase,
    pub exporter: FileExportWriter,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let catalog = load_catalog(&config.catalog)?;

        let store = Arc::new(FileSnapshotStore::new(&config.storage.data_dir));
        let notifier = Arc::new(ConsoleNotifier::new(Arc::new(TracingNotifier)));
        let renderer = Arc::new(ConsoleRenderer::new());

        let registry = Registry::load(
            catalog,
            &config.storage.slot,
            store,
            Arc::new(SystemClock),
            notifier,
            renderer,
        );

        info!(
            data_dir = %config.storage.data_dir,
            slot = %config.storage.slot,
            "Registry ready"
        );

        Ok(Self {
            registry,
            spin: SpinWheelUseCase::new(Arc::new(FastRandom)),
            exporter: FileExportWriter::new(&config.export.dir),
        })
    }
}

fn load_catalog(cfg: &CatalogConfig) -> anyhow::Result<Catalog> {
    let source: Box<dyn CatalogSource> = match &cfg.path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(EmbeddedCatalog),
    };
    Ok(source.load()?)
}
