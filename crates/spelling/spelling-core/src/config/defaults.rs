// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "spelling.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_CACHE_SIZE: i64 = -16_000; // 16 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_METRICS_ENABLED: bool = true;
