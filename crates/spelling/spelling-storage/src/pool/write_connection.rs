//! Single write connection behind a mutex.
//! Serialized writes give every document update its atomicity.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use spelling_core::config::StorageConfig;
use spelling_core::errors::{SpellingError, SpellingResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, config: &StorageConfig) -> SpellingResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(config: &StorageConfig) -> SpellingResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> SpellingResult<T>
    where
        F: FnOnce(&Connection) -> SpellingResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| {
            SpellingError::StorageError(StorageError::LockPoisoned {
                message: format!("write connection: {e}"),
            })
        })?;
        f(&guard)
    }
}
