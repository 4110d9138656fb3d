#![allow(dead_code)]

use rkn_roulette_application::ports::{Notifier, RegistryFrame, RenderSink};
use rkn_roulette_domain::Notification;
use std::sync::Mutex;

#[derive(Default)]
pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn state_changed(&self, _frame: &RegistryFrame<'_>) {}
}

#[derive(Default)]
pub struct CollectingNotifier {
    pub received: Mutex<Vec<Notification>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.lock().unwrap().push(notification.clone());
    }
}
