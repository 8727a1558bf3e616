//! SchemaStore — loads game schema descriptors from a directory tree.
//!
//! Descriptors live at `<root>/<game>/schema.yaml`. The root is injected
//! at construction; nothing here consults the ambient working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::model::GameSchema;

/// Read-only store of per-game schema descriptors.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    root: PathBuf,
}

impl SchemaStore {
    /// Create a store rooted at the given descriptor directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the descriptor file for a game.
    pub fn descriptor_path(&self, game: &str) -> PathBuf {
        self.root.join(game).join("schema.yaml")
    }

    /// Load the schema for a game, fresh from disk.
    ///
    /// Returns `SchemaError::NotFound` if no descriptor exists for the
    /// name and `SchemaError::Parse` if the descriptor is malformed.
    pub async fn load(&self, game: &str) -> SchemaResult<GameSchema> {
        let path = self.descriptor_path(game);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SchemaError::NotFound(game.to_string()));
            }
            Err(e) => return Err(SchemaError::Io(e)),
        };

        let schema: GameSchema = serde_yaml::from_str(&raw).map_err(|source| {
            SchemaError::Parse {
                game: game.to_string(),
                source,
            }
        })?;

        debug!(%game, path = %path.display(), "schema loaded");
        Ok(schema)
    }

    /// The injected descriptor root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_descriptor(root: &Path, game: &str, content: &str) {
        let dir = root.join(game);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("schema.yaml"), content).unwrap();
    }

    #[tokio::test]
    async fn loads_descriptor_from_root() {
        let dir = tempfile::tempdir().unwrap();
        write_descriptor(
            dir.path(),
            "minecraft_java",
            "name: minecraft_java\nimage: itzg/minecraft-server:latest\n",
        );

        let store = SchemaStore::new(dir.path());
        let schema = store.load("minecraft_java").await.unwrap();
        assert_eq!(schema.name, "minecraft_java");
        assert_eq!(schema.image, "itzg/minecraft-server:latest");
    }

    #[tokio::test]
    async fn missing_game_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = SchemaStore::new(dir.path());

        let err = store.load("valheim").await.unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(ref g) if g == "valheim"));
    }

    #[tokio::test]
    async fn malformed_descriptor_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_descriptor(dir.path(), "broken", "name: [unclosed\n");

        let store = SchemaStore::new(dir.path());
        let err = store.load("broken").await.unwrap_err();
        assert!(matches!(err, SchemaError::Parse { ref game, .. } if game == "broken"));
    }

    #[tokio::test]
    async fn descriptor_edit_is_visible_on_next_load() {
        let dir = tempfile::tempdir().unwrap();
        write_descriptor(dir.path(), "minecraft_java", "name: minecraft_java\nimage: a:1\n");

        let store = SchemaStore::new(dir.path());
        assert_eq!(store.load("minecraft_java").await.unwrap().image, "a:1");

        write_descriptor(dir.path(), "minecraft_java", "name: minecraft_java\nimage: a:2\n");
        assert_eq!(store.load("minecraft_java").await.unwrap().image, "a:2");
    }
}
