//! Error types for synthesis and provisioning.

use thiserror::Error;
use warden_schema::SchemaError;
use warden_state::StateError;

/// Result type alias for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors produced while synthesizing a container spec.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid port {port} for protocol '{protocol}'")]
    InvalidPort { port: u32, protocol: String },

    #[error("environment variable name '{0}' is not valid")]
    InvalidEnvName(String),

    #[error("size tier '{size}' is not defined in schema '{game}'")]
    SchemaMismatch { size: String, game: String },
}

/// Errors surfaced by the provisioning lifecycle.
///
/// Component errors pass through untransformed, wrapped only with the
/// failing operation's context.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("schema load failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("container spec synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("local record store failed: {0}")]
    Storage(#[from] StateError),

    #[error("container driver failed: {0}")]
    Driver(#[source] anyhow::Error),

    #[error("remote record store failed: {0}")]
    Remote(#[source] anyhow::Error),

    /// A container is running but could not be recorded locally, even
    /// after the recovery write. Both failures are kept.
    #[error(
        "container {container_id} started but recording it failed: {persist}; \
         recovery write also failed: {recovery}"
    )]
    OrphanedContainer {
        container_id: String,
        #[source]
        persist: StateError,
        recovery: StateError,
    },
}
