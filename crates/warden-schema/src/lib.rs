//! warden-schema — per-game descriptor model and loader.
//!
//! A game schema is a static YAML descriptor declaring the container
//! image, resource size tiers, network ports, settings, volumes, and
//! health probes for one game type. Schemas are immutable once loaded
//! and are re-read from disk on every load so a descriptor edit never
//! hides behind a stale cache.

pub mod error;
pub mod model;
pub mod store;

pub use error::{SchemaError, SchemaResult};
pub use model::{GameSchema, PortSpec, Probe, Probes, Resources, Setting, SizeTier, VolumeSpec};
pub use store::SchemaStore;
