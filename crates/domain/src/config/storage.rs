use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one `<slot>.json` file per storage key.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Key under which the blocked list is persisted.
    #[serde(default = "default_slot")]
    pub slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            slot: default_slot(),
        }
    }
}

fn default_data_dir() -> String {
    "./rkn-data".to_string()
}

fn default_slot() -> String {
    "rkn_registry".to_string()
}
