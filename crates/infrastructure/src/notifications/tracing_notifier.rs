use rkn_roulette_application::ports::Notifier;
use rkn_roulette_domain::{Notification, Severity};
use tracing::{info, warn};

/// Mirrors user notifications into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Warning => warn!(
                severity = %notification.severity,
                "{}",
                notification.message
            ),
            _ => info!(
                severity = %notification.severity,
                "{}",
                notification.message
            ),
        }
    }
}
