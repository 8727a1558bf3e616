//! InstanceStore — file-backed record store with serialized mutations.
//!
//! One pretty-printed JSON document at an injected path holds the
//! [`InstanceRecord`]. Updates merge field-by-field with
//! overwrite-with-empty semantics. Every read-merge-write cycle runs
//! behind a `tokio::sync::Mutex` so two concurrent mutations cannot
//! race; plain reads outside an in-flight update are served
//! optimistically.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::record::InstanceRecord;

/// Thread-safe store for the host's single instance record.
#[derive(Debug, Clone)]
pub struct InstanceStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl InstanceStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is created lazily on first read or update.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read the current record.
    ///
    /// If no backing file exists yet, an empty record is written out and
    /// returned; a missing file is never an error.
    pub async fn read(&self) -> StateResult<InstanceRecord> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(StateError::Deserialize),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let _guard = self.write_lock.lock().await;
                // Re-check under the lock; another caller may have
                // initialized the file while we waited.
                if let Some(record) = self.load_if_present().await? {
                    return Ok(record);
                }
                let record = InstanceRecord::default();
                self.write(&record).await?;
                debug!(path = %self.path.display(), "record file initialized");
                Ok(record)
            }
            Err(e) => Err(StateError::Io(e)),
        }
    }

    /// Merge `partial` onto the stored record and persist the result.
    ///
    /// Every field of `partial` replaces the stored field, empty values
    /// included; that is how a field is intentionally cleared. Callers
    /// construct a full record to avoid clearing fields by accident.
    /// Returns the merged record as written.
    pub async fn update(&self, partial: InstanceRecord) -> StateResult<InstanceRecord> {
        self.mutate(|record| record.merge_from(partial)).await
    }

    /// The instance id of the current record (empty if none).
    pub async fn instance_id(&self) -> StateResult<String> {
        Ok(self.read().await?.instance_id)
    }

    /// Set the instance id, preserving all other fields.
    pub async fn set_instance_id(&self, id: &str) -> StateResult<InstanceRecord> {
        self.mutate(|record| record.instance_id = id.to_string()).await
    }

    /// Set the cluster id, preserving all other fields.
    pub async fn set_cluster_id(&self, id: &str) -> StateResult<InstanceRecord> {
        self.mutate(|record| record.cluster_id = id.to_string()).await
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one read-modify-write cycle under the store lock.
    async fn mutate<F>(&self, apply: F) -> StateResult<InstanceRecord>
    where
        F: FnOnce(&mut InstanceRecord),
    {
        let _guard = self.write_lock.lock().await;

        let mut record = self.load_if_present().await?.unwrap_or_default();
        apply(&mut record);
        self.write(&record).await?;

        debug!(
            path = %self.path.display(),
            instance_id = %record.instance_id,
            "record updated"
        );
        Ok(record)
    }

    /// Read and parse the backing file, or `None` if it does not exist.
    async fn load_if_present(&self) -> StateResult<Option<InstanceRecord>> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(StateError::Deserialize),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateError::Io(e)),
        }
    }

    async fn write(&self, record: &InstanceRecord) -> StateResult<()> {
        let json = serde_json::to_vec_pretty(record).map_err(StateError::Serialize)?;
        // Write to a sibling temp file and rename over the target, so a
        // crash mid-write cannot leave a truncated record behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::ServerSpec;

    fn store_in(dir: &tempfile::TempDir) -> InstanceStore {
        InstanceStore::new(dir.path().join("warden-record.json"))
    }

    #[tokio::test]
    async fn read_on_fresh_store_returns_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let record = store.read().await.unwrap();
        assert_eq!(record, InstanceRecord::default());
        // The backing file now exists and is valid JSON.
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("instanceId"));
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let record = store
            .update(InstanceRecord {
                instance_id: "i-1".into(),
                cluster_id: "c-1".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(record.instance_id, "i-1");

        // A second store over the same path sees the durable state.
        let reread = store_in(&dir).read().await.unwrap();
        assert_eq!(reread, record);
    }

    #[tokio::test]
    async fn empty_field_in_update_clears_stored_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_instance_id("i-1").await.unwrap();
        let cleared = store.set_instance_id("").await.unwrap();
        assert_eq!(cleared.instance_id, "");
        assert_eq!(store.instance_id().await.unwrap(), "");
    }

    #[tokio::test]
    async fn set_cluster_id_preserves_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .update(InstanceRecord {
                instance_id: "i-1".into(),
                server: ServerSpec {
                    size: "xs".into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .await
            .unwrap();

        let record = store.set_cluster_id("c-9").await.unwrap();
        assert_eq!(record.cluster_id, "c-9");
        assert_eq!(record.instance_id, "i-1");
        assert_eq!(record.server.size, "xs");
    }

    #[tokio::test]
    async fn malformed_file_surfaces_deserialize_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json").unwrap();

        let err = store.read().await.unwrap_err();
        assert!(matches!(err, StateError::Deserialize(_)));
    }

    #[tokio::test]
    async fn concurrent_mutations_do_not_lose_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.read().await.unwrap();

        // Each task flips a different field; with serialized
        // read-merge-write both must survive.
        let a = store.clone();
        let b = store.clone();
        let ta = tokio::spawn(async move { a.set_instance_id("i-race").await });
        let tb = tokio::spawn(async move { b.set_cluster_id("c-race").await });
        ta.await.unwrap().unwrap();
        tb.await.unwrap().unwrap();

        let record = store.read().await.unwrap();
        assert_eq!(record.instance_id, "i-race");
        assert_eq!(record.cluster_id, "c-race");
    }

    #[tokio::test]
    async fn write_replaces_file_and_leaves_no_temp_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set_instance_id("i-1").await.unwrap();
        store.set_instance_id("i-2").await.unwrap();

        // Only the record file remains, and it parses cleanly.
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["warden-record.json".to_string()]);
        assert_eq!(store.read().await.unwrap().instance_id, "i-2");
    }

    #[tokio::test]
    async fn record_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_instance_id("i-1").await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.lines().count() > 1);
    }
}
