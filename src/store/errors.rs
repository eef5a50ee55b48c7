//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Explanation store errors
///
/// None of these reach HTTP callers: the [`ExplanationStore`] boundary
/// logs them and reports absence instead.
///
/// [`ExplanationStore`]: super::ExplanationStore
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Explanation not found: {0}")]
    NotFound(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Failed to serialize record {slug}: {source}")]
    Serialize {
        slug: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Whether the error only means "nothing stored under this key"
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
