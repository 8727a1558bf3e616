//! The durable per-host instance record.

use serde::{Deserialize, Serialize};
use warden_core::ServerSpec;

/// Durable local record of the currently provisioned instance.
///
/// Invariant: `instance_id == ""` if and only if no container is
/// currently owned by this host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceRecord {
    /// Opaque identifier of the provisioned instance; empty means none.
    pub instance_id: String,
    /// The cluster this host is enrolled in.
    pub cluster_id: String,
    /// Driver-issued identifier of the running container, recorded at
    /// creation so removal can target it explicitly.
    pub container_id: String,
    /// The desired state last accepted for this instance.
    pub server: ServerSpec,
}

impl InstanceRecord {
    /// Whether this host currently owns a provisioned instance.
    pub fn is_provisioned(&self) -> bool {
        !self.instance_id.is_empty()
    }

    /// Apply `partial` onto `self` with field-level overwrite.
    ///
    /// Every field of `partial` replaces the corresponding field here,
    /// including empty values; that is how a field is intentionally
    /// cleared. Callers build a full record (usually by mutating a copy
    /// of the current one) to avoid clearing fields unintentionally.
    pub fn merge_from(&mut self, partial: InstanceRecord) {
        self.instance_id = partial.instance_id;
        self.cluster_id = partial.cluster_id;
        self.container_id = partial.container_id;
        self.server = partial.server;
    }
}
