//! Remote record store capability interface.
//!
//! Mirrors instance state to a remote document store. The mirror is
//! kept consistent best-effort; the local record file remains the
//! source of truth.

use async_trait::async_trait;

use warden_core::ServerSpec;

/// Secondary persistence target for instance state, keyed by instance id.
#[async_trait]
pub trait RemoteRecordStore: Send + Sync {
    /// Fetch the mirrored spec for an instance, if present.
    async fn get(&self, id: &str) -> anyhow::Result<Option<ServerSpec>>;

    /// Create or replace the mirrored spec for an instance.
    async fn set(&self, id: &str, spec: &ServerSpec) -> anyhow::Result<()>;

    /// Delete the mirrored record for an instance.
    async fn delete(&self, id: &str) -> anyhow::Result<()>;
}
