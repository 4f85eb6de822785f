//! StorageEngine: owns the ConnectionPool, runs migrations at startup,
//! implements IPreferenceStore.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use spelling_core::config::StorageConfig;
use spelling_core::errors::SpellingResult;
use spelling_core::models::{
    DeleteResult, LearnedWordsRecord, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate,
};
use spelling_core::traits::IPreferenceStore;

use crate::migrations;
use crate::pool::{pragmas, ConnectionPool};
use crate::queries::{maintenance, preference_ops};

/// Path value that selects an in-memory database in `StorageConfig::db_path`.
pub const IN_MEMORY_PATH: &str = ":memory:";

/// SQLite-backed `spellingPreferences` collection.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> SpellingResult<Self> {
        let config = StorageConfig {
            db_path: path.to_string_lossy().into_owned(),
            ..StorageConfig::default()
        };
        Self::open_with_config(&config)
    }

    /// Open the database named by `config.db_path`.
    /// `":memory:"` opens an in-memory database.
    pub fn open_with_config(config: &StorageConfig) -> SpellingResult<Self> {
        if config.db_path == IN_MEMORY_PATH {
            return Self::open_in_memory_with_config(config);
        }

        let path = Path::new(&config.db_path);
        let mut pool = ConnectionPool::open_writer(path, config)?;
        Self::initialize(&pool)?;
        pool.attach_readers(config)?;
        tracing::debug!(
            db_path = %config.db_path,
            read_pool_size = pool.readers.as_ref().map_or(0, |r| r.size()),
            "spelling storage opened"
        );
        Ok(Self { pool })
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> SpellingResult<Self> {
        Self::open_in_memory_with_config(&StorageConfig::default())
    }

    fn open_in_memory_with_config(config: &StorageConfig) -> SpellingResult<Self> {
        let pool = ConnectionPool::open_in_memory(config)?;
        Self::initialize(&pool)?;
        tracing::debug!("in-memory spelling storage opened");
        Ok(Self { pool })
    }

    /// Run migrations on the writer.
    fn initialize(pool: &ConnectionPool) -> SpellingResult<()> {
        pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    /// File-backed: uses the read pool (no writer contention).
    /// In-memory: uses the writer.
    fn with_reader<F, T>(&self, f: F) -> SpellingResult<T>
    where
        F: FnOnce(&Connection) -> SpellingResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    /// Replace the raw stored word list for a token, duplicates included.
    pub fn replace_words(&self, token: &str, words: &[String]) -> SpellingResult<()> {
        self.pool
            .writer
            .with_conn(|conn| preference_ops::replace_words(conn, token, words))
    }

    /// Number of tokens with a stored record.
    pub fn count_records(&self) -> SpellingResult<usize> {
        self.with_reader(maintenance::count_records)
    }

    /// Number of records not updated since `cutoff`.
    pub fn count_updated_before(&self, cutoff: DateTime<Utc>) -> SpellingResult<usize> {
        self.with_reader(|conn| maintenance::count_updated_before(conn, cutoff))
    }

    /// Highest applied migration version.
    pub fn schema_version(&self) -> SpellingResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Whether the writer runs in WAL mode. Always false in memory.
    pub fn verify_wal_mode(&self) -> SpellingResult<bool> {
        self.pool.writer.with_conn(pragmas::verify_wal_mode)
    }
}

impl IPreferenceStore for StorageEngine {
    fn update_one(
        &self,
        filter: &TokenFilter,
        update: &WordListUpdate,
        options: UpdateOptions,
    ) -> SpellingResult<UpdateResult> {
        self.pool
            .writer
            .with_conn(|conn| preference_ops::update_one(conn, filter, update, options))
    }

    fn find_one(&self, filter: &TokenFilter) -> SpellingResult<Option<LearnedWordsRecord>> {
        self.with_reader(|conn| preference_ops::find_one(conn, filter))
    }

    fn delete_one(&self, filter: &TokenFilter) -> SpellingResult<DeleteResult> {
        self.pool
            .writer
            .with_conn(|conn| preference_ops::delete_one(conn, filter))
    }
}
