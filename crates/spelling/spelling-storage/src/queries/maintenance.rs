//! Diagnostics over the whole collection.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use spelling_core::errors::SpellingResult;

use super::preference_ops::timestamp;
use crate::to_storage_err;

/// Number of tokens with a stored record.
pub fn count_records(conn: &Connection) -> SpellingResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM spelling_preferences", [], |row| {
            row.get(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Number of records not touched since `cutoff`.
pub fn count_updated_before(conn: &Connection, cutoff: DateTime<Utc>) -> SpellingResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM spelling_preferences WHERE updated_at < ?1",
            params![timestamp(cutoff)],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
