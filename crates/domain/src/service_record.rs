use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

pub type ServiceId = u32;

/// A service from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub name: Arc<str>,
    pub icon: Arc<str>,
    pub country: Arc<str>,
    pub risk: Arc<str>,
    #[serde(deserialize_with = "deserialize_users")]
    pub users: Arc<str>,
}

impl ServiceRecord {
    /// `0` stands for a record without an id.
    pub fn has_valid_id(&self) -> bool {
        self.id != 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUsers {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts the user count either as display text or as a bare JSON number.
pub(crate) fn deserialize_users<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawUsers::deserialize(deserializer)? {
        RawUsers::Text(s) => s,
        RawUsers::Integer(n) => n.to_string(),
        RawUsers::Float(f) => f.to_string(),
    };
    Ok(Arc::from(text.as_str()))
}
