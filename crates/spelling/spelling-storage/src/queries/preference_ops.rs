//! Document operations on `spelling_preferences`: update-one, find-one, delete-one.

use rusqlite::{params, Connection, OptionalExtension};

use spelling_core::errors::SpellingResult;
use spelling_core::models::{
    DeleteResult, LearnedWordsRecord, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate,
};

use crate::{to_serialization_err, to_storage_err};

/// Apply a set-add / set-remove to one document.
/// Read, mutate and write happen in one transaction.
pub fn update_one(
    conn: &Connection,
    filter: &TokenFilter,
    update: &WordListUpdate,
    options: UpdateOptions,
) -> SpellingResult<UpdateResult> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("update_one begin: {e}")))?;

    match update_one_inner(&tx, filter, update, options) {
        Ok(result) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("update_one commit: {e}")))?;
            Ok(result)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn update_one_inner(
    conn: &Connection,
    filter: &TokenFilter,
    update: &WordListUpdate,
    options: UpdateOptions,
) -> SpellingResult<UpdateResult> {
    match load_words(conn, &filter.token)? {
        Some(mut words) => {
            let changed = update.apply(&mut words);
            if changed {
                store_words(conn, &filter.token, &words)?;
            }
            Ok(UpdateResult {
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted: false,
            })
        }
        None if options.upsert => {
            let mut words = Vec::new();
            update.apply(&mut words);
            insert_record(conn, &filter.token, &words)?;
            Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted: true,
            })
        }
        None => Ok(UpdateResult::default()),
    }
}

/// Fetch the document for a token.
pub fn find_one(
    conn: &Connection,
    filter: &TokenFilter,
) -> SpellingResult<Option<LearnedWordsRecord>> {
    Ok(load_words(conn, &filter.token)?
        .map(|learned_words| LearnedWordsRecord::new(filter.token.clone(), learned_words)))
}

/// Delete the document for a token.
pub fn delete_one(conn: &Connection, filter: &TokenFilter) -> SpellingResult<DeleteResult> {
    let deleted = conn
        .execute(
            "DELETE FROM spelling_preferences WHERE token = ?1",
            params![filter.token],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(DeleteResult {
        deleted_count: deleted as u64,
    })
}

/// Overwrite the raw stored word list, duplicates included.
/// Used by imports and by tests that need to seed pre-existing duplicates.
pub fn replace_words(conn: &Connection, token: &str, words: &[String]) -> SpellingResult<()> {
    let encoded = encode_words(words)?;
    conn.execute(
        "INSERT INTO spelling_preferences (token, learned_words, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(token) DO UPDATE SET
            learned_words = excluded.learned_words,
            updated_at = excluded.updated_at",
        params![token, encoded, now()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn load_words(conn: &Connection, token: &str) -> SpellingResult<Option<Vec<String>>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT learned_words FROM spelling_preferences WHERE token = ?1",
            params![token],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(|json| decode_words(&json)).transpose()
}

fn store_words(conn: &Connection, token: &str, words: &[String]) -> SpellingResult<()> {
    let encoded = encode_words(words)?;
    conn.execute(
        "UPDATE spelling_preferences SET learned_words = ?2, updated_at = ?3 WHERE token = ?1",
        params![token, encoded, now()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn insert_record(conn: &Connection, token: &str, words: &[String]) -> SpellingResult<()> {
    let encoded = encode_words(words)?;
    let timestamp = now();
    conn.execute(
        "INSERT INTO spelling_preferences (token, learned_words, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)",
        params![token, encoded, timestamp],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn encode_words(words: &[String]) -> SpellingResult<String> {
    serde_json::to_string(words).map_err(|e| to_serialization_err(e.to_string()))
}

fn decode_words(json: &str) -> SpellingResult<Vec<String>> {
    serde_json::from_str(json).map_err(|e| to_serialization_err(e.to_string()))
}

/// Same shape as the schema's `strftime('%Y-%m-%dT%H:%M:%fZ')` defaults,
/// so stored timestamps compare lexically.
pub(crate) fn now() -> String {
    timestamp(chrono::Utc::now())
}

pub(crate) fn timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
