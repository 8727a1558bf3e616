//! Container driver capability interface.
//!
//! The real implementation talks to a container runtime's remote API;
//! the provisioner only depends on this trait and holds no runtime
//! state of its own.

use async_trait::async_trait;

use crate::container::ContainerSpec;

/// Operations the provisioner needs from a container runtime.
#[async_trait]
pub trait ContainerDriver: Send + Sync {
    /// Pull the image so creation does not block on the registry.
    async fn pull_image(&self, image: &str) -> anyhow::Result<()>;

    /// Create a container from the spec and start it. Returns the
    /// runtime-issued container id.
    async fn create_and_start(&self, spec: &ContainerSpec) -> anyhow::Result<String>;

    /// List the ids of containers this host manages.
    async fn list_managed(&self) -> anyhow::Result<Vec<String>>;

    /// Stop and remove the given containers along with their volumes.
    async fn remove_containers(&self, ids: &[String]) -> anyhow::Result<()>;

    /// Reclaim storage left behind by removed containers.
    async fn prune_unused(&self) -> anyhow::Result<()>;
}
