//! Desired-state types for a managed game server instance.
//!
//! The empty string is the "unset" value throughout: the configuration
//! store merges records field by field with overwrite-with-empty
//! semantics, so every field must have a meaningful zero value.

use serde::{Deserialize, Serialize};

/// The game a server instance hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// Game name, matching a schema descriptor (e.g. "minecraft_java").
    pub name: String,
    /// Mod loader variant (e.g. "vanilla", "forge").
    pub mod_loader: String,
}

/// Networking configuration for an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSpec {
    /// Exposure type: "public" or "private".
    #[serde(rename = "type")]
    pub kind: String,
    /// Address the instance is reachable at, if assigned.
    pub address: String,
}

/// Caller-desired configuration for one game server instance.
///
/// Partial specs are legal on update: absent fields deserialize to their
/// zero value and overwrite the stored record, which is how a field is
/// intentionally cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSpec {
    /// Display name of the instance.
    pub name: String,
    /// Size tier name, keyed into the schema's size map (e.g. "xs").
    pub size: String,
    pub game: Game,
    pub network: NetworkSpec,
    /// Lifecycle status ("running" once provisioned, empty otherwise).
    pub status: String,
}
