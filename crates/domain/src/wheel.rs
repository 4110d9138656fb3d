use std::sync::Arc;

use crate::service_record::{ServiceId, ServiceRecord};

/// Upper bound on segments drawn on the wheel.
pub const MAX_SEGMENTS: usize = 12;
pub const FULL_TURN_DEG: f64 = 360.0;

/// Spins always cover at least three full turns.
pub const SPIN_MIN_ROTATION_DEG: f64 = 1080.0;
pub const SPIN_ROTATION_SPREAD_DEG: f64 = 720.0;
pub const SPIN_MIN_DURATION_MS: u64 = 3000;
pub const SPIN_DURATION_SPREAD_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct WheelSegment {
    pub index: usize,
    pub service_id: ServiceId,
    pub name: Arc<str>,
    pub icon: Arc<str>,
    /// Rotation of the segment's leading edge, in degrees.
    pub angle: f64,
}

/// Segment layout for the current pool of available services.
#[derive(Debug, Clone, Default)]
pub struct WheelLayout {
    segments: Vec<WheelSegment>,
}

impl WheelLayout {
    pub fn build(available: &[ServiceRecord]) -> Self {
        let count = available.len().min(MAX_SEGMENTS);
        if count == 0 {
            return Self::default();
        }

        let step = FULL_TURN_DEG / count as f64;
        let segments = (0..count)
            .map(|i| {
                let service = &available[i % available.len()];
                WheelSegment {
                    index: i,
                    service_id: service.id,
                    name: Arc::clone(&service.name),
                    icon: Arc::clone(&service.icon),
                    angle: i as f64 * step,
                }
            })
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_angle(&self) -> Option<f64> {
        if self.segments.is_empty() {
            None
        } else {
            Some(FULL_TURN_DEG / self.segments.len() as f64)
        }
    }

    /// Index of the segment under the pointer once the wheel rests at `rotation_deg`.
    pub fn landed_index(&self, rotation_deg: f64) -> Option<usize> {
        let angle = self.segment_angle()?;
        let count = self.segments.len();
        let normalized = rotation_deg.rem_euclid(FULL_TURN_DEG);
        let raw = ((FULL_TURN_DEG - normalized) / angle).floor() as usize;
        Some(raw % count)
    }

    pub fn segment_at(&self, rotation_deg: f64) -> Option<&WheelSegment> {
        self.landed_index(rotation_deg)
            .and_then(|idx| self.segments.get(idx))
    }
}

/// Target rotation and animation length for a single spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_rotation_deg: f64,
    pub duration_ms: u64,
}

impl SpinPlan {
    /// Maps two unit samples in `[0, 1)` onto the spin ranges.
    pub fn from_unit_samples(rotation_sample: f64, duration_sample: f64) -> Self {
        let rotation_sample = rotation_sample.clamp(0.0, 1.0);
        let duration_sample = duration_sample.clamp(0.0, 1.0);

        Self {
            target_rotation_deg: SPIN_MIN_ROTATION_DEG + rotation_sample * SPIN_ROTATION_SPREAD_DEG,
            duration_ms: SPIN_MIN_DURATION_MS
                + (duration_sample * SPIN_DURATION_SPREAD_MS as f64) as u64,
        }
    }
}
