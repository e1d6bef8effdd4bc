//! In-memory reference implementation of the actor state store.
//!
//! Deterministic and test-friendly. Deployments that need state to survive
//! a restart should use a file- or server-backed store.

use crate::model::ActorStateRecord;
use crate::traits::ActorStateStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use bridge_types::ActorId;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory actor state store.
#[derive(Default)]
pub struct InMemoryActorStateStore {
    records: RwLock<HashMap<ActorId, ActorStateRecord>>,
}

impl InMemoryActorStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActorStateStore for InMemoryActorStateStore {
    async fn load(&self, actor_id: &ActorId) -> StorageResult<Option<ActorStateRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|_| StorageError::Backend("records lock poisoned".to_string()))?;
        Ok(guard.get(actor_id).cloned())
    }

    async fn save(&self, record: ActorStateRecord) -> StorageResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StorageError::Backend("records lock poisoned".to_string()))?;
        guard.insert(record.actor_id.clone(), record);
        Ok(())
    }
}
