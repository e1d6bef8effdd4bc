//! JSON-file actor state store.
//!
//! One file per actor under a base directory, the server-neutral analogue
//! of the client-local per-user storage the dashboard shipped with. Writes
//! are atomic (write to `.tmp`, then rename) so an interrupted write cannot
//! corrupt a record.

use crate::model::ActorStateRecord;
use crate::traits::ActorStateStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use bridge_types::ActorId;
use std::path::{Path, PathBuf};

/// JSON-file actor state store.
pub struct JsonFileActorStateStore {
    dir: PathBuf,
}

impl JsonFileActorStateStore {
    /// Create a store rooted at the given directory. The directory is
    /// created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Base directory holding one record file per actor.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, actor_id: &ActorId) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize(&actor_id.0)))
    }
}

// Actor ids come from the auth layer and may contain path separators;
// everything outside [A-Za-z0-9_-] maps to '_' so an id cannot address a
// file outside the store directory.
fn sanitize(id: &str) -> String {
    let cleaned: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl ActorStateStore for JsonFileActorStateStore {
    async fn load(&self, actor_id: &ActorId) -> StorageResult<Option<ActorStateRecord>> {
        let path = self.record_path(actor_id);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let record = serde_json::from_str(&contents)
            .map_err(|e| StorageError::Serialization(format!("deserialization failed: {}", e)))?;
        Ok(Some(record))
    }

    async fn save(&self, record: ActorStateRecord) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| StorageError::Serialization(format!("serialization failed: {}", e)))?;

        tokio::fs::create_dir_all(&self.dir).await?;

        // Atomic write: write to .tmp then rename
        let path = self.record_path(&record.actor_id);
        let tmp_path = path.with_extension("tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}
