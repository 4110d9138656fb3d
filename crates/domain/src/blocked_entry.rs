use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::service_record::{deserialize_users, ServiceId, ServiceRecord};

pub const BLOCKED_DATE_FORMAT: &str = "%d.%m.%Y";
pub const BLOCKED_TIME_FORMAT: &str = "%H:%M";

/// A catalog service captured at the moment it was blocked.
///
/// Field order here is the on-disk field order of snapshots and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedEntry {
    pub id: ServiceId,
    pub name: Arc<str>,
    pub icon: Arc<str>,
    pub country: Arc<str>,
    pub risk: Arc<str>,
    #[serde(deserialize_with = "deserialize_users")]
    pub users: Arc<str>,
    #[serde(rename = "blockedDate")]
    pub blocked_date: Arc<str>,
    #[serde(rename = "blockedTime")]
    pub blocked_time: Arc<str>,
}

impl BlockedEntry {
    pub fn from_service(service: &ServiceRecord, blocked_at: NaiveDateTime) -> Self {
        let date = blocked_at.format(BLOCKED_DATE_FORMAT).to_string();
        let time = blocked_at.format(BLOCKED_TIME_FORMAT).to_string();

        Self {
            id: service.id,
            name: Arc::clone(&service.name),
            icon: Arc::clone(&service.icon),
            country: Arc::clone(&service.country),
            risk: Arc::clone(&service.risk),
            users: Arc::clone(&service.users),
            blocked_date: Arc::from(date.as_str()),
            blocked_time: Arc::from(time.as_str()),
        }
    }

    pub fn to_service_record(&self) -> ServiceRecord {
        ServiceRecord {
            id: self.id,
            name: Arc::clone(&self.name),
            icon: Arc::clone(&self.icon),
            country: Arc::clone(&self.country),
            risk: Arc::clone(&self.risk),
            users: Arc::clone(&self.users),
        }
    }

    pub fn blocked_at_display(&self) -> String {
        format!("{} {}", self.blocked_date, self.blocked_time)
    }
}
