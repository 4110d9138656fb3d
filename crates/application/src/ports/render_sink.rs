use rkn_roulette_domain::{BlockedEntry, RegistryStats, ServiceRecord};

/// Everything the presentation layer redraws after a state change.
#[derive(Debug, Clone, Copy)]
pub struct RegistryFrame<'a> {
    pub blocked: &'a [BlockedEntry],
    pub available: &'a [ServiceRecord],
    pub stats: RegistryStats,
}

pub trait RenderSink: Send + Sync {
    fn state_changed(&self, frame: &RegistryFrame<'_>);
}
