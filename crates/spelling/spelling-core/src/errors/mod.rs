mod spelling_error;
mod storage_error;

pub use spelling_error::{SpellingError, SpellingResult};
pub use storage_error::StorageError;
