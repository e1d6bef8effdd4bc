use bridge_types::{ActionId, ActorId, FeatureId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The persisted per-actor gating state.
///
/// `actions_performed` and `unlocked_features` only ever grow, and
/// `onboarding_complete` only ever moves false -> true. The record carries
/// no role: identity is owned by the authentication layer, not this store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorStateRecord {
    pub actor_id: ActorId,
    pub actions_performed: BTreeSet<ActionId>,
    pub unlocked_features: BTreeSet<FeatureId>,
    pub onboarding_complete: bool,
    pub updated_at: DateTime<Utc>,
}

impl ActorStateRecord {
    /// Empty record for an actor with no history.
    pub fn initial(actor_id: ActorId, onboarding_complete: bool) -> Self {
        Self {
            actor_id,
            actions_performed: BTreeSet::new(),
            unlocked_features: BTreeSet::new(),
            onboarding_complete,
            updated_at: Utc::now(),
        }
    }
}
