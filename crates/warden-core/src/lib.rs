//! warden-core — shared domain types for the Warden provisioning engine.
//!
//! The desired-state types here are what callers hand to the provisioner
//! and what the local and remote record stores persist. All of them use
//! camelCase wire names so the on-disk JSON document and the remote
//! mirror stay byte-compatible with each other.

pub mod types;

pub use types::{Game, NetworkSpec, ServerSpec};
