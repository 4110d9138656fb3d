use rkn_roulette_domain::{ServiceRecord, SpinPlan, WheelLayout, WheelSegment};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::RandomSource;
use crate::services::Registry;

#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub plan: SpinPlan,
    pub segment: WheelSegment,
    pub service: ServiceRecord,
}

/// Spins the wheel over the registry's available services.
///
/// The animation itself is left to the caller; this only decides where the
/// wheel stops and which service sits under the pointer.
pub struct SpinWheelUseCase {
    random: Arc<dyn RandomSource>,
}

impl SpinWheelUseCase {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    #[instrument(skip_all)]
    pub fn execute(&self, registry: &Registry) -> Option<SpinOutcome> {
        let layout = WheelLayout::build(registry.available());
        if layout.is_empty() {
            debug!("Spin skipped, every service is blocked");
            return None;
        }

        let plan = SpinPlan::from_unit_samples(self.random.next_unit(), self.random.next_unit());
        let segment = layout.segment_at(plan.target_rotation_deg)?.clone();
        let service = registry.find_available(segment.service_id)?.clone();

        info!(
            service_id = service.id,
            segment = segment.index,
            rotation = plan.target_rotation_deg,
            "Wheel stopped"
        );

        Some(SpinOutcome {
            plan,
            segment,
            service,
        })
    }
}
