//! Bridge Service - the unified progressive disclosure facade.
//!
//! Every page in the dashboard reports milestone actions here, and the
//! navigation shell asks here for its menu. The facade owns one session per
//! signed-in actor and wires the milestone ledger, the unlock rules, the
//! onboarding state and the capability composer together over a pluggable
//! storage backend.
//!
//! Mutations follow persist-then-commit: the next state is built, written to
//! the store, and only then made visible to readers. A gated capability can
//! therefore never render enabled ahead of its milestone's persistence, and a
//! failed write leaves the actor exactly where they were.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

use std::collections::BTreeSet;
use std::sync::Arc;

use bridge_catalog::CapabilityCatalog;
use bridge_composer::{CapabilityComposer, CapabilityView};
use bridge_ledger::ActionLedger;
use bridge_onboarding::{OnboardingState, COMPLETION_MILESTONE};
use bridge_storage::memory::InMemoryActorStateStore;
use bridge_storage::{ActorStateRecord, ActorStateStore, StorageError};
use bridge_types::{ActionId, Actor, ActorId, ActorRole, FeatureId};
use bridge_unlock::UnlockRuleEngine;
use chrono::Utc;
use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Disclosure service errors.
#[derive(Debug, Error)]
pub enum DisclosureError {
    #[error("No active session for actor: {0}")]
    SessionNotFound(ActorId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// One actor's live session: the identity fixed at sign-in plus the guarded
/// progression state.
struct ActorSession {
    actor: Actor,
    state: RwLock<Progression>,
}

/// The in-memory gating state for one actor.
#[derive(Clone, Debug)]
struct Progression {
    ledger: ActionLedger,
    unlocked: BTreeSet<FeatureId>,
    onboarding: OnboardingState,
}

impl Progression {
    fn initial_for(role: ActorRole) -> Self {
        Self {
            ledger: ActionLedger::new(),
            unlocked: BTreeSet::new(),
            onboarding: OnboardingState::initial_for(role),
        }
    }

    fn from_record(record: &ActorStateRecord) -> Self {
        Self {
            ledger: ActionLedger::from_set(record.actions_performed.clone()),
            unlocked: record.unlocked_features.clone(),
            onboarding: OnboardingState::from_flag(record.onboarding_complete),
        }
    }

    fn to_record(&self, actor_id: &ActorId) -> ActorStateRecord {
        ActorStateRecord {
            actor_id: actor_id.clone(),
            actions_performed: self.ledger.performed().clone(),
            unlocked_features: self.unlocked.clone(),
            onboarding_complete: self.onboarding.as_flag(),
            updated_at: Utc::now(),
        }
    }
}

/// The progressive disclosure service.
///
/// Hydrates each actor's state from the store once at session start, then
/// serves reads from memory and funnels every mutation through a single
/// write path.
pub struct DisclosureService {
    composer: CapabilityComposer,
    rules: UnlockRuleEngine,
    store: Arc<dyn ActorStateStore>,
    sessions: DashMap<ActorId, Arc<ActorSession>>,
}

impl DisclosureService {
    /// Create a service with the product defaults and an in-memory store.
    pub fn new() -> Self {
        Self::with_storage(Arc::new(InMemoryActorStateStore::new()))
    }

    /// Create a service with the product defaults over an explicit storage
    /// backend.
    pub fn with_storage(store: Arc<dyn ActorStateStore>) -> Self {
        Self::with_components(
            CapabilityCatalog::with_defaults(),
            UnlockRuleEngine::with_defaults(),
            store,
        )
    }

    /// Create a service from custom components.
    pub fn with_components(
        catalog: CapabilityCatalog,
        rules: UnlockRuleEngine,
        store: Arc<dyn ActorStateStore>,
    ) -> Self {
        Self {
            composer: CapabilityComposer::new(Arc::new(catalog)),
            rules,
            store,
            sessions: DashMap::new(),
        }
    }

    // ============ Session Lifecycle ============

    /// Start a session for an authenticated actor, hydrating gating state
    /// from the store. A missing record yields the role's initial state.
    /// Starting an already-active session keeps the live state.
    pub async fn start_session(&self, actor: Actor) -> Result<(), DisclosureError> {
        if self.sessions.contains_key(&actor.id) {
            debug!(actor = %actor.id, "Session already active");
            return Ok(());
        }

        let progression = match self.store.load(&actor.id).await? {
            Some(record) => {
                debug!(actor = %actor.id, role = %actor.role, "Session hydrated from store");
                Progression::from_record(&record)
            }
            None => {
                debug!(actor = %actor.id, role = %actor.role, "Session started with initial state");
                Progression::initial_for(actor.role)
            }
        };

        self.sessions.entry(actor.id.clone()).or_insert_with(|| {
            Arc::new(ActorSession {
                actor,
                state: RwLock::new(progression),
            })
        });
        Ok(())
    }

    /// Drop an actor's live session. Persisted state is untouched and the
    /// next [`start_session`](Self::start_session) resumes from it.
    pub fn end_session(&self, actor_id: &ActorId) {
        self.sessions.remove(actor_id);
    }

    // ============ Milestone Reporting ============

    /// Untyped entry point for pages: parse and record a milestone action.
    ///
    /// An id outside the known enumeration is logged and ignored, with no
    /// state change and no error. Pages fire these notifications blind and
    /// must never break over a stale or misspelled id.
    pub async fn report_action(
        &self,
        actor_id: &ActorId,
        action: &str,
    ) -> Result<Vec<FeatureId>, DisclosureError> {
        match action.parse::<ActionId>() {
            Ok(action) => self.record_action(actor_id, action).await,
            Err(_) => {
                warn!(actor = %actor_id, action, "Ignoring unknown milestone action");
                Ok(Vec::new())
            }
        }
    }

    /// Record a milestone action and re-evaluate the unlock rules.
    ///
    /// Idempotent: an action already in the ledger is a no-op. Returns the
    /// features this call newly unlocked, in rule-table order.
    pub async fn record_action(
        &self,
        actor_id: &ActorId,
        action: ActionId,
    ) -> Result<Vec<FeatureId>, DisclosureError> {
        let session = self.session(actor_id)?;
        let mut state = session.state.write().await;

        if state.ledger.has(action) {
            debug!(actor = %actor_id, action = %action, "Milestone action already recorded");
            return Ok(Vec::new());
        }

        let mut next = state.clone();
        next.ledger.record(action);
        let newly = self.rules.advance(next.ledger.performed(), &mut next.unlocked);
        self.store.save(next.to_record(actor_id)).await?;
        *state = next;

        info!(actor = %actor_id, action = %action, "Milestone action recorded");
        if !newly.is_empty() {
            info!(actor = %actor_id, features = ?newly, "Features unlocked");
        }
        Ok(newly)
    }

    /// Complete the guided onboarding walkthrough.
    ///
    /// The transition, its first-contact milestone and the resulting unlocks
    /// land in a single store write. Exactly-once: later calls are no-ops,
    /// so the walkthrough's finish button can be pressed twice without
    /// re-recording the milestone.
    pub async fn complete_onboarding(
        &self,
        actor_id: &ActorId,
    ) -> Result<Vec<FeatureId>, DisclosureError> {
        let session = self.session(actor_id)?;
        let mut state = session.state.write().await;

        if state.onboarding.is_complete() {
            debug!(actor = %actor_id, "Onboarding already complete");
            return Ok(Vec::new());
        }

        let mut next = state.clone();
        next.onboarding.complete();
        next.ledger.record(COMPLETION_MILESTONE);
        let newly = self.rules.advance(next.ledger.performed(), &mut next.unlocked);
        self.store.save(next.to_record(actor_id)).await?;
        *state = next;

        info!(actor = %actor_id, milestone = %COMPLETION_MILESTONE, "Onboarding completed");
        if !newly.is_empty() {
            info!(actor = %actor_id, features = ?newly, "Features unlocked");
        }
        Ok(newly)
    }

    // ============ Shell Queries ============

    /// The ordered, annotated capability list for the actor's navigation
    /// shell.
    pub async fn menu(&self, actor_id: &ActorId) -> Result<Vec<CapabilityView>, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(self
            .composer
            .compose(&session.actor, state.onboarding, &state.unlocked))
    }

    /// The actor's current onboarding state.
    pub async fn onboarding_state(
        &self,
        actor_id: &ActorId,
    ) -> Result<OnboardingState, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(state.onboarding)
    }

    /// Every milestone action the actor has performed.
    pub async fn actions_performed(
        &self,
        actor_id: &ActorId,
    ) -> Result<BTreeSet<ActionId>, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(state.ledger.performed().clone())
    }

    /// Whether a single milestone action has been recorded.
    pub async fn has_action(
        &self,
        actor_id: &ActorId,
        action: ActionId,
    ) -> Result<bool, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(state.ledger.has(action))
    }

    /// The actor's unlocked features.
    pub async fn unlocked_features(
        &self,
        actor_id: &ActorId,
    ) -> Result<BTreeSet<FeatureId>, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(state.unlocked.clone())
    }

    /// Whether a single feature is unlocked.
    pub async fn is_unlocked(
        &self,
        actor_id: &ActorId,
        feature: FeatureId,
    ) -> Result<bool, DisclosureError> {
        let session = self.session(actor_id)?;
        let state = session.state.read().await;
        Ok(state.unlocked.contains(&feature))
    }

    // ============ Component Access ============

    /// Get the capability catalog.
    pub fn catalog(&self) -> &CapabilityCatalog {
        self.composer.catalog()
    }

    /// Get the unlock rule engine.
    pub fn rules(&self) -> &UnlockRuleEngine {
        &self.rules
    }

    fn session(&self, actor_id: &ActorId) -> Result<Arc<ActorSession>, DisclosureError> {
        self.sessions
            .get(actor_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DisclosureError::SessionNotFound(actor_id.clone()))
    }
}

impl Default for DisclosureService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_composer::CapabilityState;
    use bridge_storage::StorageResult;
    use proptest::prelude::*;

    fn company() -> Actor {
        Actor::new(ActorId::new("acme-srl"), ActorRole::Company, "ACME Srl")
    }

    fn partner() -> Actor {
        Actor::new(ActorId::new("nairobi-hub"), ActorRole::Partner, "Nairobi Hub")
    }

    async fn started(actor: &Actor) -> DisclosureService {
        let service = DisclosureService::new();
        service.start_session(actor.clone()).await.unwrap();
        service
    }

    #[tokio::test]
    async fn company_onboarding_shows_only_the_dashboard() {
        let actor = company();
        let service = started(&actor).await;

        assert!(service
            .onboarding_state(&actor.id)
            .await
            .unwrap()
            .is_active());

        let menu = service.menu(&actor.id).await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].id.0, "dashboard");
    }

    #[tokio::test]
    async fn completing_onboarding_records_the_first_contact_milestone_once() {
        let actor = company();
        let service = started(&actor).await;

        let newly = service.complete_onboarding(&actor.id).await.unwrap();
        assert_eq!(newly, vec![FeatureId::Messaging]);
        assert!(service
            .has_action(&actor.id, ActionId::FirstContactMade)
            .await
            .unwrap());

        let again = service.complete_onboarding(&actor.id).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(service.actions_performed(&actor.id).await.unwrap().len(), 1);

        let menu = service.menu(&actor.id).await.unwrap();
        let messages = menu.iter().find(|view| view.id.0 == "messages").unwrap();
        assert_eq!(messages.state, CapabilityState::Enabled);
    }

    #[tokio::test]
    async fn hydrated_actor_without_milestones_sees_disabled_entries() {
        let store = Arc::new(InMemoryActorStateStore::new());
        let actor = company();
        store
            .save(ActorStateRecord::initial(actor.id.clone(), true))
            .await
            .unwrap();

        let service = DisclosureService::with_storage(store);
        service.start_session(actor.clone()).await.unwrap();

        let menu = service.menu(&actor.id).await.unwrap();
        let messages = menu.iter().find(|view| view.id.0 == "messages").unwrap();
        assert_eq!(messages.state, CapabilityState::Disabled);
        let blockchain = menu.iter().find(|view| view.id.0 == "blockchain").unwrap();
        assert_eq!(blockchain.state, CapabilityState::Disabled);
    }

    #[tokio::test]
    async fn milestones_unlock_their_features() {
        let actor = company();
        let service = started(&actor).await;
        service.complete_onboarding(&actor.id).await.unwrap();

        let newly = service
            .record_action(&actor.id, ActionId::MeetingCompleted)
            .await
            .unwrap();
        assert_eq!(newly, vec![FeatureId::Blockchain]);

        let newly = service
            .record_action(&actor.id, ActionId::OrderMilestoneCreated)
            .await
            .unwrap();
        assert_eq!(
            newly,
            vec![FeatureId::Orders, FeatureId::Logistics, FeatureId::Inspection]
        );

        let menu = service.menu(&actor.id).await.unwrap();
        let enabled: Vec<&str> = menu
            .iter()
            .filter(|view| view.state == CapabilityState::Enabled)
            .map(|view| view.id.0.as_str())
            .collect();
        assert!(enabled.contains(&"blockchain"));
        assert!(enabled.contains(&"logistics"));

        // contract-signed was never reported
        let payments = menu.iter().find(|view| view.id.0 == "payments").unwrap();
        assert_eq!(payments.state, CapabilityState::Disabled);
    }

    #[tokio::test]
    async fn duplicate_reports_are_no_ops() {
        let actor = company();
        let service = started(&actor).await;
        service.complete_onboarding(&actor.id).await.unwrap();

        let first = service
            .report_action(&actor.id, "contract-signed")
            .await
            .unwrap();
        assert_eq!(first, vec![FeatureId::Payments]);

        let second = service
            .report_action(&actor.id, "contract-signed")
            .await
            .unwrap();
        assert!(second.is_empty());

        let unlocked = service.unlocked_features(&actor.id).await.unwrap();
        assert_eq!(unlocked.len(), 2);
    }

    #[tokio::test]
    async fn unknown_actions_are_logged_and_ignored() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .try_init();

        let actor = company();
        let service = started(&actor).await;

        let newly = service
            .report_action(&actor.id, "first_message_sent")
            .await
            .unwrap();
        assert!(newly.is_empty());
        assert!(service
            .actions_performed(&actor.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn unlocks_survive_inconsistent_external_state() {
        let store = Arc::new(InMemoryActorStateStore::new());
        let actor = company();

        // An external reset wiped the action but left the unlock cached.
        let mut record = ActorStateRecord::initial(actor.id.clone(), true);
        record.unlocked_features.insert(FeatureId::Payments);
        store.save(record).await.unwrap();

        let service = DisclosureService::with_storage(store);
        service.start_session(actor.clone()).await.unwrap();
        assert!(service
            .is_unlocked(&actor.id, FeatureId::Payments)
            .await
            .unwrap());

        // Re-evaluation after another milestone must not retract it.
        service
            .record_action(&actor.id, ActionId::MeetingCompleted)
            .await
            .unwrap();
        assert!(service
            .is_unlocked(&actor.id, FeatureId::Payments)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn partner_sessions_skip_onboarding_and_company_entries() {
        let actor = partner();
        let service = started(&actor).await;

        assert!(service
            .onboarding_state(&actor.id)
            .await
            .unwrap()
            .is_complete());

        let menu = service.menu(&actor.id).await.unwrap();
        assert!(menu.len() > 1);
        let routes: Vec<&str> = menu.iter().map(|view| view.route.as_str()).collect();
        assert!(routes.contains(&"/meetings"));
        assert!(!routes.contains(&"/expo"));
    }

    #[tokio::test]
    async fn operations_require_a_started_session() {
        let service = DisclosureService::new();
        let ghost = ActorId::new("ghost");

        let err = service.menu(&ghost).await.unwrap_err();
        assert!(matches!(err, DisclosureError::SessionNotFound(_)));

        let err = service
            .record_action(&ghost, ActionId::ContractSigned)
            .await
            .unwrap_err();
        assert!(matches!(err, DisclosureError::SessionNotFound(_)));
    }

    struct FailingStore;

    #[async_trait::async_trait]
    impl ActorStateStore for FailingStore {
        async fn load(&self, _actor_id: &ActorId) -> StorageResult<Option<ActorStateRecord>> {
            Ok(None)
        }

        async fn save(&self, _record: ActorStateRecord) -> StorageResult<()> {
            Err(StorageError::Backend("write refused".to_string()))
        }
    }

    #[tokio::test]
    async fn failed_writes_do_not_advance_state() {
        let actor = partner();
        let service = DisclosureService::with_storage(Arc::new(FailingStore));
        service.start_session(actor.clone()).await.unwrap();

        let err = service
            .record_action(&actor.id, ActionId::ContractSigned)
            .await
            .unwrap_err();
        assert!(matches!(err, DisclosureError::Storage(_)));

        assert!(service
            .actions_performed(&actor.id)
            .await
            .unwrap()
            .is_empty());
        assert!(!service
            .is_unlocked(&actor.id, FeatureId::Payments)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn failed_writes_keep_onboarding_active() {
        let actor = company();
        let service = DisclosureService::with_storage(Arc::new(FailingStore));
        service.start_session(actor.clone()).await.unwrap();

        let err = service.complete_onboarding(&actor.id).await.unwrap_err();
        assert!(matches!(err, DisclosureError::Storage(_)));

        assert!(service
            .onboarding_state(&actor.id)
            .await
            .unwrap()
            .is_active());
        assert_eq!(service.menu(&actor.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_reports_from_independent_surfaces_converge() {
        let actor = company();
        let service = Arc::new(started(&actor).await);
        service.complete_onboarding(&actor.id).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            for action in ActionId::ALL {
                let service = Arc::clone(&service);
                let actor_id = actor.id.clone();
                handles.push(tokio::spawn(async move {
                    service.record_action(&actor_id, action).await
                }));
            }
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let actions = service.actions_performed(&actor.id).await.unwrap();
        assert_eq!(actions.len(), ActionId::ALL.len());
        let unlocked = service.unlocked_features(&actor.id).await.unwrap();
        assert_eq!(unlocked.len(), FeatureId::ALL.len());
    }

    #[tokio::test]
    async fn actors_do_not_share_state() {
        let service = DisclosureService::new();
        let first = company();
        let second = Actor::new(
            ActorId::new("essaouira-trade"),
            ActorRole::Company,
            "Essaouira Trade",
        );
        service.start_session(first.clone()).await.unwrap();
        service.start_session(second.clone()).await.unwrap();

        service.complete_onboarding(&first.id).await.unwrap();
        service
            .record_action(&first.id, ActionId::ContractSigned)
            .await
            .unwrap();

        assert!(service
            .is_unlocked(&first.id, FeatureId::Payments)
            .await
            .unwrap());
        assert!(!service
            .is_unlocked(&second.id, FeatureId::Payments)
            .await
            .unwrap());
        assert!(service
            .onboarding_state(&second.id)
            .await
            .unwrap()
            .is_active());
    }

    #[tokio::test]
    async fn state_survives_a_session_restart() {
        let store: Arc<dyn ActorStateStore> = Arc::new(InMemoryActorStateStore::new());
        let actor = company();

        let service = DisclosureService::with_storage(Arc::clone(&store));
        service.start_session(actor.clone()).await.unwrap();
        service.complete_onboarding(&actor.id).await.unwrap();
        service
            .record_action(&actor.id, ActionId::MeetingCompleted)
            .await
            .unwrap();
        service.end_session(&actor.id);

        let resumed = DisclosureService::with_storage(store);
        resumed.start_session(actor.clone()).await.unwrap();
        assert!(resumed
            .onboarding_state(&actor.id)
            .await
            .unwrap()
            .is_complete());
        assert!(resumed
            .is_unlocked(&actor.id, FeatureId::Blockchain)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn json_backed_service_survives_a_restart() {
        let dir = std::env::temp_dir().join(format!("bridge_service_{}", uuid::Uuid::new_v4()));
        let actor = company();

        {
            let store = Arc::new(bridge_storage::json::JsonFileActorStateStore::new(&dir));
            let service = DisclosureService::with_storage(store);
            service.start_session(actor.clone()).await.unwrap();
            service.complete_onboarding(&actor.id).await.unwrap();
            service
                .record_action(&actor.id, ActionId::ContractSigned)
                .await
                .unwrap();
        }

        let store = Arc::new(bridge_storage::json::JsonFileActorStateStore::new(&dir));
        let resumed = DisclosureService::with_storage(store);
        resumed.start_session(actor.clone()).await.unwrap();
        assert!(resumed
            .onboarding_state(&actor.id)
            .await
            .unwrap()
            .is_complete());
        assert!(resumed
            .is_unlocked(&actor.id, FeatureId::Payments)
            .await
            .unwrap());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn custom_tables_drive_custom_products() {
        let catalog = CapabilityCatalog::new(vec![
            bridge_catalog::Capability::new("dashboard", "layout-dashboard", "Dashboard", "/dashboard"),
            bridge_catalog::Capability::new("market", "trending-up", "Market", "/market")
                .with_role(ActorRole::Partner)
                .with_gate(FeatureId::Payments),
        ]);
        let rules = UnlockRuleEngine::new(vec![bridge_unlock::UnlockRule::new(
            FeatureId::Payments,
            ActionId::MeetingCompleted,
        )]);
        let service = DisclosureService::with_components(
            catalog,
            rules,
            Arc::new(InMemoryActorStateStore::new()),
        );

        let actor = partner();
        service.start_session(actor.clone()).await.unwrap();
        let menu = service.menu(&actor.id).await.unwrap();
        let market = menu.iter().find(|view| view.id.0 == "market").unwrap();
        assert_eq!(market.state, CapabilityState::Disabled);

        service
            .record_action(&actor.id, ActionId::MeetingCompleted)
            .await
            .unwrap();
        let menu = service.menu(&actor.id).await.unwrap();
        let market = menu.iter().find(|view| view.id.0 == "market").unwrap();
        assert_eq!(market.state, CapabilityState::Enabled);
    }

    #[derive(Debug, Clone)]
    enum DisclosureOp {
        Report(ActionId),
        ReportUnknown,
        CompleteOnboarding,
    }

    fn op_strategy() -> impl Strategy<Value = Vec<DisclosureOp>> {
        proptest::collection::vec(
            prop_oneof![
                prop_oneof![
                    Just(ActionId::FirstContactMade),
                    Just(ActionId::MeetingCompleted),
                    Just(ActionId::ContractSigned),
                    Just(ActionId::OrderMilestoneCreated),
                ]
                .prop_map(DisclosureOp::Report),
                Just(DisclosureOp::ReportUnknown),
                Just(DisclosureOp::CompleteOnboarding),
            ],
            0..16,
        )
    }

    proptest! {
        #[test]
        fn property_disclosure_state_only_ever_grows(ops in op_strategy()) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");

            rt.block_on(async move {
                let actor = company();
                let service = DisclosureService::new();
                service.start_session(actor.clone()).await.expect("session");

                let mut seen_complete = false;
                let mut prior_unlocked = BTreeSet::new();
                for op in ops {
                    match op {
                        DisclosureOp::Report(action) => {
                            service.record_action(&actor.id, action).await.expect("record");
                        }
                        DisclosureOp::ReportUnknown => {
                            service
                                .report_action(&actor.id, "made-coffee")
                                .await
                                .expect("report");
                        }
                        DisclosureOp::CompleteOnboarding => {
                            service.complete_onboarding(&actor.id).await.expect("complete");
                            seen_complete = true;
                        }
                    }

                    let unlocked = service.unlocked_features(&actor.id).await.expect("query");
                    assert!(unlocked.is_superset(&prior_unlocked));
                    prior_unlocked = unlocked;

                    if seen_complete {
                        assert!(service
                            .onboarding_state(&actor.id)
                            .await
                            .expect("query")
                            .is_complete());
                    }

                    let menu = service.menu(&actor.id).await.expect("menu");
                    assert_eq!(menu[0].id.0, "dashboard");
                }
            });
        }
    }
}
