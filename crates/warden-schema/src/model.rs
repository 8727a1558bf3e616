//! Game schema model — mirrors the YAML descriptor layout.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static descriptor for one game type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSchema {
    pub name: String,
    /// Container image reference, used verbatim.
    pub image: String,
    /// Upstream documentation URL for the image.
    pub url: String,
    /// CPU-to-memory ratio hint for the hosting platform (e.g. "1-2").
    pub ratio: String,
    /// Size tier name ("xs".."xl") to resources and player capacity.
    pub sizes: HashMap<String, SizeTier>,
    pub network: Vec<PortSpec>,
    pub settings: Vec<Setting>,
    pub volumes: Vec<VolumeSpec>,
    pub probes: Probes,
}

/// One resource tier of a game schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeTier {
    pub resources: Resources,
    /// Maximum player capacity at this tier.
    pub players: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub cpu: String,
    pub memory: String,
}

/// A network port the game listens on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortSpec {
    pub name: String,
    pub port: u32,
    pub protocol: String,
}

/// A game setting, surfaced to the container as an environment variable.
///
/// The value may be a whole-value template expression such as
/// `"{{ .players }}"`, resolved at synthesis time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub name: String,
    pub value: String,
}

/// A persistent volume the game writes into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSpec {
    pub name: String,
    pub path: String,
    pub class: String,
    pub size: String,
}

/// Health probe configuration.
///
/// Carried in the schema for the hosting platform; container synthesis
/// does not consume these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Probes {
    pub command: Vec<String>,
    pub startup_probe: Probe,
    pub readiness_probe: Probe,
    pub liveness_probe: Probe,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Probe {
    pub initial_delay_seconds: u32,
    pub period_seconds: u32,
    pub failure_threshold: u32,
    pub success_threshold: u32,
    pub timeout_seconds: u32,
}

impl GameSchema {
    /// Look up the size tier for a tier name, if present.
    pub fn size_tier(&self, size: &str) -> Option<&SizeTier> {
        self.sizes.get(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINECRAFT_YAML: &str = r#"
name: minecraft_java
image: "itzg/minecraft-server:latest"
url: "https://github.com/itzg/docker-minecraft-server"
ratio: "1-2"
sizes:
  xs:
    resources:
      cpu: "1"
      memory: 2Gi
    players: 8
  s:
    resources:
      cpu: "2"
      memory: 4Gi
    players: 16
network:
  - name: game
    port: 25565
    protocol: tcp
settings:
  - name: EULA
    value: "TRUE"
  - name: MAX_PLAYERS
    value: "{{ .players }}"
volumes:
  - name: data
    path: /data
    class: standard
    size: 10Gi
probes:
  command: ["mc-health"]
  startupProbe:
    initialDelaySeconds: 30
    periodSeconds: 5
    failureThreshold: 30
    successThreshold: 1
    timeoutSeconds: 1
"#;

    #[test]
    fn parses_full_descriptor() {
        let schema: GameSchema = serde_yaml::from_str(MINECRAFT_YAML).unwrap();
        assert_eq!(schema.name, "minecraft_java");
        assert_eq!(schema.image, "itzg/minecraft-server:latest");
        assert_eq!(schema.size_tier("xs").unwrap().players, 8);
        assert_eq!(schema.network[0].port, 25565);
        assert_eq!(schema.settings[1].value, "{{ .players }}");
        assert_eq!(schema.volumes[0].path, "/data");
        assert_eq!(schema.probes.startup_probe.failure_threshold, 30);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let schema: GameSchema = serde_yaml::from_str("name: tiny\nimage: img:1").unwrap();
        assert!(schema.sizes.is_empty());
        assert!(schema.network.is_empty());
        assert_eq!(schema.probes, Probes::default());
    }

    #[test]
    fn size_tier_lookup_misses_cleanly() {
        let schema: GameSchema = serde_yaml::from_str(MINECRAFT_YAML).unwrap();
        assert!(schema.size_tier("xl").is_none());
    }
}
