//! History persistence error types.

use super::storage::StorageError;
use thiserror::Error;

/// Errors that can occur while persisting the calculation history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The storage backend rejected a read or write
    #[error("history storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The log could not be serialized to its durable form
    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
