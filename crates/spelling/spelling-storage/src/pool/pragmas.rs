//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, configurable cache and busy_timeout.

use rusqlite::Connection;

use spelling_core::config::StorageConfig;
use spelling_core::errors::SpellingResult;

use crate::to_storage_err;

/// Apply write-side pragmas to the writer connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> SpellingResult<()> {
    let journal_mode = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal_mode};
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Apply read-only pragmas to a read connection.
/// Skips write-side settings (journal_mode, synchronous).
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> SpellingResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        PRAGMA temp_store = MEMORY;
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> SpellingResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
