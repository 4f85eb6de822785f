//! v002: index on `updated_at` for stale-record maintenance queries.

use rusqlite::Connection;

use spelling_core::errors::SpellingResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SpellingResult<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_spelling_preferences_updated_at
            ON spelling_preferences(updated_at);",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
