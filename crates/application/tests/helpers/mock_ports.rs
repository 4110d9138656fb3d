#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rkn_roulette_application::ports::{
    Clock, Notifier, RandomSource, RegistryFrame, RenderSink, SnapshotStore,
};
use rkn_roulette_application::services::Registry;
use rkn_roulette_domain::{
    Catalog, DomainError, Notification, RegistryStats, ServiceId, ServiceRecord, Severity,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const SLOT: &str = "rkn_registry";

#[derive(Default)]
pub struct MockSnapshotStore {
    slots: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(key: &str, raw: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .lock()
            .unwrap()
            .insert(key.to_string(), raw.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::SnapshotRead {
                slot: key.to_string(),
                reason: "mock read failure".to_string(),
            });
        }
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::SnapshotWrite {
                slot: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().unwrap().last().cloned()
    }

    pub fn last_severity(&self) -> Option<Severity> {
        self.last().map(|n| n.severity)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.lock().unwrap().push(notification.clone());
    }
}

#[derive(Default)]
pub struct RecordingRenderSink {
    frames: Mutex<Vec<RenderedFrame>>,
}

#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub blocked_ids: Vec<ServiceId>,
    pub available_ids: Vec<ServiceId>,
    pub stats: RegistryStats,
}

impl RecordingRenderSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<RenderedFrame> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl RenderSink for RecordingRenderSink {
    fn state_changed(&self, frame: &RegistryFrame<'_>) {
        self.frames.lock().unwrap().push(RenderedFrame {
            blocked_ids: frame.blocked.iter().map(|e| e.id).collect(),
            available_ids: frame.available.iter().map(|s| s.id).collect(),
            stats: frame.stats,
        });
    }
}

pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new() -> Self {
        let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        Self {
            now: Mutex::new(today.and_hms_opt(14, 30, 0).unwrap()),
            today,
        }
    }

    pub fn set_now(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }

    fn utc_today(&self) -> NaiveDate {
        self.today
    }
}

/// Replays the given samples, then repeats the last one.
pub struct SequenceRandom {
    samples: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl SequenceRandom {
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples: Mutex::new(samples.into()),
            last: Mutex::new(0.0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.samples.lock().unwrap().pop_front() {
            *last = next;
        }
        *last
    }
}

pub fn service(id: ServiceId, name: &str) -> ServiceRecord {
    ServiceRecord {
        id,
        name: name.into(),
        icon: format!("fab fa-{}", name.to_lowercase()).into(),
        country: "USA".into(),
        risk: "Высокий".into(),
        users: "10M+".into(),
    }
}

/// `[1 A, 2 B, 3 C]`
pub fn abc_catalog() -> Catalog {
    Catalog::new(vec![service(1, "A"), service(2, "B"), service(3, "C")]).unwrap()
}

pub struct Harness {
    pub store: Arc<MockSnapshotStore>,
    pub clock: Arc<FixedClock>,
    pub notifier: Arc<RecordingNotifier>,
    pub renderer: Arc<RecordingRenderSink>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MockSnapshotStore::new())
    }

    pub fn with_store(store: MockSnapshotStore) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(FixedClock::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            renderer: Arc::new(RecordingRenderSink::new()),
        }
    }

    pub fn load(&self, catalog: Catalog) -> Registry {
        Registry::load(
            catalog,
            SLOT,
            self.store.clone(),
            self.clock.clone(),
            self.notifier.clone(),
            self.renderer.clone(),
        )
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
