//! v001: the `spelling_preferences` collection, one row per token.

use rusqlite::Connection;

use spelling_core::errors::SpellingResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SpellingResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS spelling_preferences (
            token          TEXT PRIMARY KEY,
            learned_words  TEXT NOT NULL DEFAULT '[]',
            created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
