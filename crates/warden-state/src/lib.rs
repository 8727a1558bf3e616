//! warden-state — local persistent instance record store.
//!
//! Exactly one [`InstanceRecord`] exists per host, stored as a single
//! pretty-printed JSON document at an injected path. The file is the
//! sole source of truth for local state; the remote mirror is a
//! best-effort secondary.
//!
//! All mutations run read-merge-write behind an async mutex owned by
//! the store, so concurrent updates cannot lose writes.

pub mod error;
pub mod record;
pub mod store;

pub use error::{StateError, StateResult};
pub use record::InstanceRecord;
pub use store::InstanceStore;
