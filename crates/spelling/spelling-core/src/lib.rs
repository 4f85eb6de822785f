//! # spelling-core
//!
//! Foundation crate for learned-words persistence.
//! Defines the record model, the document-store collaborator trait,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod dedup;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpellingConfig;
pub use errors::{SpellingError, SpellingResult, StorageError};
pub use models::{
    DeleteResult, LearnedWordsRecord, TokenFilter, UpdateOptions, UpdateResult, WordListUpdate,
};
pub use traits::IPreferenceStore;
