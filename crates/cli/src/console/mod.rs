mod notifier;
mod renderer;

pub use notifier::ConsoleNotifier;
pub use renderer::ConsoleRenderer;

use rkn_roulette_domain::{BlockedEntry, RegistryStats, ServiceRecord};

pub fn format_stats(stats: &RegistryStats) -> String {
    format!(
        "Blocked {}/{} ({}%), {} still available",
        stats.blocked_count, stats.total_services, stats.success_rate, stats.available_count
    )
}

pub fn format_service(service: &ServiceRecord) -> String {
    format!(
        "{:>4}  {:<16} {:<12} {:<12} {}",
        service.id, service.name, service.country, service.risk, service.users
    )
}

pub fn format_blocked(entry: &BlockedEntry) -> String {
    format!(
        "{:>4}  {:<16} {:<12} {:<10} {}",
        entry.id,
        entry.name,
        entry.country,
        entry.users,
        entry.blocked_at_display()
    )
}
