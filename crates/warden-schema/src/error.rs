//! Error types for schema loading.

use thiserror::Error;

/// Result type alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while loading a game schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema descriptor for game: {0}")]
    NotFound(String),

    #[error("malformed schema descriptor for game {game}: {source}")]
    Parse {
        game: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read schema descriptor: {0}")]
    Io(#[from] std::io::Error),
}
