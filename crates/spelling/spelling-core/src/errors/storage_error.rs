/// Failures of the external document store. Surfaced to the caller, never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("failed to (de)serialize stored document: {message}")]
    Serialization { message: String },

    #[error("connection lock poisoned: {message}")]
    LockPoisoned { message: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}
