use rkn_roulette_domain::Notification;

/// Presentation-side sink for user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}
