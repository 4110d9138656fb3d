#![allow(dead_code)]
use rkn_roulette_domain::{ServiceId, ServiceRecord};
use std::sync::Arc;

pub struct ServiceRecordBuilder {
    id: ServiceId,
    name: Arc<str>,
    icon: Arc<str>,
    country: Arc<str>,
    risk: Arc<str>,
    users: Arc<str>,
}

impl ServiceRecordBuilder {
    pub fn new(id: ServiceId) -> Self {
        Self {
            id,
            name: format!("Service {}", id).into(),
            icon: "fas fa-globe".into(),
            country: "USA".into(),
            risk: "Средний".into(),
            users: "1M+".into(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = country.into();
        self
    }

    pub fn users(mut self, users: &str) -> Self {
        self.users = users.into();
        self
    }

    pub fn build(self) -> ServiceRecord {
        ServiceRecord {
            id: self.id,
            name: self.name,
            icon: self.icon,
            country: self.country,
            risk: self.risk,
            users: self.users,
        }
    }
}

pub fn services(ids: &[ServiceId]) -> Vec<ServiceRecord> {
    ids.iter()
        .map(|&id| ServiceRecordBuilder::new(id).build())
        .collect()
}
