//! Versioned schema migrations, tracked in `schema_version`.
//!
//! Each migration runs in its own transaction together with its version row,
//! so a failed migration leaves the previous version intact.

mod v001_spelling_preferences;
mod v002_updated_at_index;

use rusqlite::{params, Connection};

use spelling_core::errors::{SpellingError, SpellingResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> SpellingResult<()>;

/// All migrations in application order.
const MIGRATIONS: &[(u32, MigrationFn)] = &[
    (1, v001_spelling_preferences::migrate),
    (2, v002_updated_at_index::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded schema version.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> SpellingResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;
    for (version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        apply_one(conn, *version, *migrate)?;
        tracing::info!(version = *version, "applied spelling storage migration");
        applied += 1;
    }
    Ok(applied)
}

/// Highest applied schema version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> SpellingResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply_one(conn: &Connection, version: u32, migrate: MigrationFn) -> SpellingResult<()> {
    let failed = |reason: String| {
        SpellingError::StorageError(StorageError::MigrationFailed { version, reason })
    };

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| failed(e.to_string()))?;
    migrate(&tx).map_err(|e| failed(e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        params![version],
    )
    .map_err(|e| failed(e.to_string()))?;
    tx.commit().map_err(|e| failed(e.to_string()))
}
