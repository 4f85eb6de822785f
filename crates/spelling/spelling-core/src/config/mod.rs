pub mod defaults;
mod observability_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{SpellingError, SpellingResult};

/// Top-level configuration, one section per subsystem.
/// Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl SpellingConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> SpellingResult<Self> {
        toml::from_str(text).map_err(|e| SpellingError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> SpellingResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SpellingError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }
}
