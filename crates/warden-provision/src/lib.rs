//! warden-provision — the provisioning engine for a single managed
//! game-server container.
//!
//! Combines a per-game schema and a caller-desired [`ServerSpec`]
//! (re-exported from `warden-core`) into a runtime-agnostic
//! [`ContainerSpec`], and drives the create-or-update / query / remove
//! lifecycle against a [`ContainerDriver`].
//!
//! The host owns at most one managed instance at a time; the durable
//! record of it lives in `warden-state`.

pub mod container;
pub mod driver;
pub mod error;
pub mod provisioner;
pub mod remote;
pub mod template;

pub use container::{BindMount, ContainerSpec, PortBinding, Protocol, synthesize};
pub use driver::ContainerDriver;
pub use error::{ProvisionError, ProvisionResult, SynthesisError};
pub use provisioner::{InstanceView, Provisioner, STATUS_RUNNING};
pub use remote::RemoteRecordStore;
pub use template::TemplateExpr;

pub use warden_core::ServerSpec;
