use serde::{Deserialize, Serialize};
use std::path::Path;

use super::catalog::CatalogConfig;
use super::errors::ConfigError;
use super::export::ExportConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;

const LOCAL_CONFIG_PATH: &str = "rkn-roulette.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rkn-roulette/config.toml";

/// Main configuration structure for RKN Roulette
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where the blocked list is persisted
    pub storage: StorageConfig,

    /// Service catalog source
    pub catalog: CatalogConfig,

    /// Export destination
    pub export: ExportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rkn-roulette.toml in current directory
    /// 3. /etc/rkn-roulette/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dir) = overrides.data_dir {
            self.storage.data_dir = dir;
        }
        if let Some(path) = overrides.catalog_path {
            self.catalog.path = Some(path);
        }
        if let Some(dir) = overrides.export_dir {
            self.export.dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "storage.data_dir cannot be empty".to_string(),
            ));
        }

        let slot = self.storage.slot.trim();
        if slot.is_empty() {
            return Err(ConfigError::Validation(
                "storage.slot cannot be empty".to_string(),
            ));
        }
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(ConfigError::Validation(format!(
                "storage.slot '{}' must be a plain name",
                slot
            )));
        }

        if self.export.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub data_dir: Option<String>,
    pub catalog_path: Option<String>,
    pub export_dir: Option<String>,
    pub log_level: Option<String>,
}
