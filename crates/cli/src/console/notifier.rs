use rkn_roulette_application::ports::Notifier;
use rkn_roulette_domain::{Notification, Severity};
use std::sync::Arc;

/// Prints notifications for the user, then hands them to `inner`.
pub struct ConsoleNotifier {
    inner: Arc<dyn Notifier>,
}

impl ConsoleNotifier {
    pub fn new(inner: Arc<dyn Notifier>) -> Self {
        Self { inner }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        let tag = match notification.severity {
            Severity::Success => "OK",
            Severity::Warning => "!!",
            Severity::Danger => "XX",
            Severity::Primary => "->",
        };
        println!("[{}] {}", tag, notification.message);
        self.inner.notify(notification);
    }
}
