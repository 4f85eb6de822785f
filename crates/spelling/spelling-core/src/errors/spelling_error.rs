use super::StorageError;

/// Top-level error for every learned-words operation.
#[derive(Debug, thiserror::Error)]
pub enum SpellingError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("config error: {0}")]
    ConfigError(String),
}

impl SpellingError {
    /// Shorthand for rejecting an empty or malformed argument.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure came from the document store.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

pub type SpellingResult<T> = Result<T, SpellingError>;
