use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging and metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive used when `SPELLING_LOG` is unset.
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,
    /// Record per-operation call counts and latencies.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            metrics_enabled: defaults::DEFAULT_METRICS_ENABLED,
        }
    }
}
