//! Provisioner — the create-or-update / query / remove lifecycle.
//!
//! Two states exist: EMPTY (no instance id recorded) and PROVISIONED
//! (instance id recorded, container presumed running). The local record
//! store is only mutated after the corresponding driver operation has
//! succeeded, so a crash can leave a running container without a record
//! (recoverable by manual reconciliation) but never a record claiming a
//! container that does not exist.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use warden_core::ServerSpec;
use warden_schema::SchemaStore;
use warden_state::{InstanceRecord, InstanceStore};

use crate::container::synthesize;
use crate::driver::ContainerDriver;
use crate::error::{ProvisionError, ProvisionResult};
use crate::remote::RemoteRecordStore;

/// Status value persisted for a provisioned instance.
pub const STATUS_RUNNING: &str = "running";

/// What a lifecycle operation reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceView {
    /// No instance is provisioned on this host.
    Empty,
    /// The currently provisioned instance's desired state.
    Active(ServerSpec),
}

impl InstanceView {
    pub fn is_empty(&self) -> bool {
        matches!(self, InstanceView::Empty)
    }

    pub fn server(&self) -> Option<&ServerSpec> {
        match self {
            InstanceView::Empty => None,
            InstanceView::Active(spec) => Some(spec),
        }
    }
}

/// Orchestrates schema loading, spec synthesis, the container driver,
/// and the local record store for the host's single managed instance.
pub struct Provisioner {
    schemas: SchemaStore,
    store: InstanceStore,
    driver: Arc<dyn ContainerDriver>,
    remote: Arc<dyn RemoteRecordStore>,
}

impl Provisioner {
    pub fn new(
        schemas: SchemaStore,
        store: InstanceStore,
        driver: Arc<dyn ContainerDriver>,
        remote: Arc<dyn RemoteRecordStore>,
    ) -> Self {
        Self {
            schemas,
            store,
            driver,
            remote,
        }
    }

    /// Report the currently provisioned instance, if any.
    ///
    /// A fresh store reads as `Empty`, never as an error.
    pub async fn get_server(&self) -> ProvisionResult<InstanceView> {
        let record = self.store.read().await?;
        if !record.is_provisioned() {
            return Ok(InstanceView::Empty);
        }
        Ok(InstanceView::Active(record.server))
    }

    /// Create the instance or update its desired-state metadata.
    ///
    /// From EMPTY this pulls the image, creates and starts the
    /// container, and records the new instance. From PROVISIONED it
    /// updates the persisted metadata only; the running container is
    /// not redeployed or mutated.
    pub async fn update_server(&self, mut spec: ServerSpec) -> ProvisionResult<InstanceView> {
        let current = self.store.read().await?;
        let schema = self.schemas.load(&spec.game.name).await?;
        let container = synthesize(&spec.name, &schema, &spec)?;
        spec.status = STATUS_RUNNING.to_string();

        let mut next = current.clone();
        next.server = spec;

        let mut created: Option<String> = None;
        if current.is_provisioned() {
            debug!(
                instance_id = %current.instance_id,
                "instance already provisioned; updating metadata only"
            );
        } else {
            let instance_id = Uuid::new_v4().to_string();
            self.driver
                .pull_image(&container.image)
                .await
                .map_err(ProvisionError::Driver)?;
            let container_id = self
                .driver
                .create_and_start(&container)
                .await
                .map_err(ProvisionError::Driver)?;
            info!(
                %instance_id,
                %container_id,
                image = %container.image,
                "container created and started"
            );
            next.instance_id = instance_id;
            next.container_id = container_id.clone();
            created = Some(container_id);
        }

        let record = match self.store.update(next.clone()).await {
            Ok(record) => record,
            Err(persist) => {
                let Some(container_id) = created else {
                    return Err(persist.into());
                };
                // The container is already running; without a record it
                // would be orphaned. Retry the write once before giving
                // up, and report both failures if the retry fails too.
                warn!(
                    %container_id,
                    error = %persist,
                    "record write failed after container start; retrying"
                );
                match self.store.update(next).await {
                    Ok(record) => record,
                    Err(recovery) => {
                        return Err(ProvisionError::OrphanedContainer {
                            container_id,
                            persist,
                            recovery,
                        });
                    }
                }
            }
        };

        // Mirror to the remote store after local truth is durable.
        self.remote
            .set(&record.instance_id, &record.server)
            .await
            .map_err(ProvisionError::Remote)?;

        info!(instance_id = %record.instance_id, "server update persisted");
        Ok(InstanceView::Active(record.server))
    }

    /// Tear the instance down. Safe to call when nothing is provisioned.
    ///
    /// Removal targets the container id recorded at creation; driver-side
    /// discovery is only a fallback for records predating that id, and
    /// removes every container it finds.
    pub async fn remove_server(&self) -> ProvisionResult<InstanceView> {
        let record = self.store.read().await?;

        let targets = if record.container_id.is_empty() {
            self.driver
                .list_managed()
                .await
                .map_err(ProvisionError::Driver)?
        } else {
            vec![record.container_id.clone()]
        };

        if !targets.is_empty() {
            self.driver
                .remove_containers(&targets)
                .await
                .map_err(ProvisionError::Driver)?;
            info!(count = targets.len(), "containers removed");
        }
        self.driver
            .prune_unused()
            .await
            .map_err(ProvisionError::Driver)?;

        if !record.is_provisioned() {
            debug!("no instance recorded; removal is a no-op");
            return Ok(InstanceView::Empty);
        }

        self.remote
            .delete(&record.instance_id)
            .await
            .map_err(ProvisionError::Remote)?;

        // Clear everything except cluster enrollment. This is the last
        // step: local state must never claim EMPTY before the driver
        // has confirmed removal.
        self.store
            .update(InstanceRecord {
                cluster_id: record.cluster_id.clone(),
                ..Default::default()
            })
            .await?;

        info!(instance_id = %record.instance_id, "instance removed");
        Ok(InstanceView::Empty)
    }
}
