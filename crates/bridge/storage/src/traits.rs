use crate::model::ActorStateRecord;
use crate::StorageResult;
use async_trait::async_trait;
use bridge_types::ActorId;

/// Storage interface for per-actor gating state.
#[async_trait]
pub trait ActorStateStore: Send + Sync {
    /// Read the record for one actor. A missing record is `Ok(None)`.
    async fn load(&self, actor_id: &ActorId) -> StorageResult<Option<ActorStateRecord>>;

    /// Write the full record for one actor, replacing any previous one.
    async fn save(&self, record: ActorStateRecord) -> StorageResult<()>;
}
