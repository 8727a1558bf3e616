//! Error types for the instance record store.

use thiserror::Error;

/// Result type alias for store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("record file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("stored record is malformed: {0}")]
    Deserialize(#[source] serde_json::Error),
}
