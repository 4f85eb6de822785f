//! # spelling-storage
//!
//! SQLite implementation of the `spellingPreferences` document collection.
//! One serialized write connection, a round-robin read pool for file-backed
//! databases, versioned migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use spelling_core::errors::{SpellingError, StorageError};

/// Wrap a SQLite failure message as a `SpellingError`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> SpellingError {
    SpellingError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}

/// Wrap a failure to encode or decode a stored word list.
pub(crate) fn to_serialization_err(message: impl Into<String>) -> SpellingError {
    SpellingError::StorageError(StorageError::Serialization {
        message: message.into(),
    })
}
