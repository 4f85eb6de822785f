//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use spelling_core::config::StorageConfig;
use spelling_core::errors::SpellingResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases: a second in-memory connection
    /// would be a separate, empty database.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open only the writer for the given database file. Readers are attached
    /// with [`ConnectionPool::attach_readers`] once the schema exists.
    pub fn open_writer(path: &Path, config: &StorageConfig) -> SpellingResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool; every read goes through the writer.
    pub fn open_in_memory(config: &StorageConfig) -> SpellingResult<Self> {
        let writer = WriteConnection::open_in_memory(config)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Open the read pool against the same file as the writer.
    /// No-op for in-memory pools.
    pub fn attach_readers(&mut self, config: &StorageConfig) -> SpellingResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(path, config)?);
        }
        Ok(())
    }
}
