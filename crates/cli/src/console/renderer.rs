use rkn_roulette_application::ports::{RegistryFrame, RenderSink};
use std::sync::atomic::{AtomicBool, Ordering};

/// Prints the stats line after each change. The frame emitted by the
/// initial load is skipped so read-only commands stay quiet.
pub struct ConsoleRenderer {
    loaded: AtomicBool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            loaded: AtomicBool::new(false),
        }
    }
}

impl RenderSink for ConsoleRenderer {
    fn state_changed(&self, frame: &RegistryFrame<'_>) {
        if !self.loaded.swap(true, Ordering::SeqCst) {
            return;
        }
        println!("{}", super::format_stats(&frame.stats));
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
