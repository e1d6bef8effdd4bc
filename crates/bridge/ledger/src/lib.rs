//! Bridge ledger - per-actor record of completed milestone actions.
//!
//! Append-only by construction: the type exposes no removal surface, so a
//! recorded action cannot be taken back within a lifetime. Recording is
//! idempotent; racing surfaces reporting the same action collapse to one
//! record. The ledger is pure and silent; actor-scoped logging and
//! persistence belong to the facade that owns it.

#![deny(unsafe_code)]

use bridge_types::ActionId;
use std::collections::BTreeSet;

/// The set of milestone actions one actor has performed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionLedger {
    performed: BTreeSet<ActionId>,
}

impl ActionLedger {
    /// Empty ledger for an actor with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from a persisted action set.
    pub fn from_set(performed: BTreeSet<ActionId>) -> Self {
        Self { performed }
    }

    /// Record an action. Returns `true` the first time, `false` when the
    /// action was already recorded (a no-op, never an error).
    pub fn record(&mut self, action: ActionId) -> bool {
        self.performed.insert(action)
    }

    /// Whether the action has been recorded.
    pub fn has(&self, action: ActionId) -> bool {
        self.performed.contains(&action)
    }

    /// All recorded actions.
    pub fn performed(&self) -> &BTreeSet<ActionId> {
        &self.performed
    }

    /// Consume the ledger into its underlying action set.
    pub fn into_set(self) -> BTreeSet<ActionId> {
        self.performed
    }

    pub fn len(&self) -> usize {
        self.performed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_is_idempotent() {
        let mut ledger = ActionLedger::new();
        assert!(ledger.record(ActionId::FirstContactMade));
        assert!(!ledger.record(ActionId::FirstContactMade));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn recorded_actions_are_visible() {
        let mut ledger = ActionLedger::new();
        ledger.record(ActionId::MeetingCompleted);
        ledger.record(ActionId::ContractSigned);

        assert!(ledger.has(ActionId::MeetingCompleted));
        assert!(ledger.has(ActionId::ContractSigned));
        assert!(!ledger.has(ActionId::OrderMilestoneCreated));
        assert_eq!(ledger.performed().len(), 2);
    }

    #[test]
    fn hydrated_ledger_reports_prior_actions() {
        let mut persisted = BTreeSet::new();
        persisted.insert(ActionId::OrderMilestoneCreated);

        let ledger = ActionLedger::from_set(persisted.clone());
        assert!(ledger.has(ActionId::OrderMilestoneCreated));
        assert_eq!(ledger.into_set(), persisted);
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = ActionLedger::new();
        assert!(ledger.is_empty());
        assert!(!ledger.has(ActionId::FirstContactMade));
    }
}
