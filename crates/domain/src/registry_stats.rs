use serde::Serialize;

/// Figures shown next to the registry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RegistryStats {
    pub blocked_count: usize,
    pub total_services: usize,
    pub available_count: usize,
    /// Percentage of the catalog currently blocked, rounded half up.
    pub success_rate: u32,
}

impl RegistryStats {
    pub fn compute(blocked_count: usize, total_services: usize) -> Self {
        Self {
            blocked_count,
            total_services,
            available_count: total_services.saturating_sub(blocked_count),
            success_rate: success_rate(blocked_count, total_services),
        }
    }
}

/// `round(100 * blocked / total)`, with an empty catalog reported as 0%.
pub fn success_rate(blocked_count: usize, total_services: usize) -> u32 {
    if total_services == 0 {
        return 0;
    }
    let blocked = blocked_count as u64;
    let total = total_services as u64;
    ((200 * blocked + total) / (2 * total)) as u32
}
