//! Container spec synthesis.
//!
//! Combines a resolved game schema and a desired server spec into a
//! runtime-agnostic container specification. Synthesis is deterministic
//! and side-effect free; the spec is built fresh on every provisioning
//! call and never persisted.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use warden_core::ServerSpec;
use warden_schema::GameSchema;

use crate::error::SynthesisError;
use crate::template::resolve_value;

/// Valid environment variable names.
static ENV_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Transport protocol of an exposed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
}

impl Protocol {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "tcp" => Some(Protocol::Tcp),
            "udp" => Some(Protocol::Udp),
            "sctp" => Some(Protocol::Sctp),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
            Protocol::Sctp => write!(f, "sctp"),
        }
    }
}

/// A (port, protocol) pair exposed by the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBinding {
    pub port: u16,
    pub protocol: Protocol,
}

/// A host path bind-mounted into the container at the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindMount {
    pub source: String,
    pub target: String,
}

/// Runtime-agnostic description of the container to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    /// Deduplicated by (port, protocol), in schema order.
    pub exposed_ports: Vec<PortBinding>,
    pub binds: Vec<BindMount>,
    /// `NAME=value` entries, in schema order, duplicates preserved
    /// (the container runtime applies last-wins).
    pub env: Vec<String>,
}

/// Build a container spec from a schema and a desired server spec.
pub fn synthesize(
    name: &str,
    schema: &GameSchema,
    server: &ServerSpec,
) -> Result<ContainerSpec, SynthesisError> {
    let mut exposed_ports: Vec<PortBinding> = Vec::with_capacity(schema.network.len());
    for network in &schema.network {
        let protocol = Protocol::parse(&network.protocol);
        let port = u16::try_from(network.port).ok().filter(|p| *p != 0);
        let binding = match (port, protocol) {
            (Some(port), Some(protocol)) => PortBinding { port, protocol },
            _ => {
                return Err(SynthesisError::InvalidPort {
                    port: network.port,
                    protocol: network.protocol.clone(),
                });
            }
        };
        if !exposed_ports.contains(&binding) {
            exposed_ports.push(binding);
        }
    }

    let binds = schema
        .volumes
        .iter()
        .map(|volume| BindMount {
            source: volume.path.clone(),
            target: volume.path.clone(),
        })
        .collect();

    let mut env = Vec::with_capacity(schema.settings.len());
    for setting in &schema.settings {
        if !ENV_NAME_RE.is_match(&setting.name) {
            return Err(SynthesisError::InvalidEnvName(setting.name.clone()));
        }
        let value = resolve_value(&setting.value, schema, server)?;
        env.push(format!("{}={}", setting.name, value));
    }

    Ok(ContainerSpec {
        name: name.to_string(),
        image: schema.image.clone(),
        exposed_ports,
        binds,
        env,
    })
}
