//! Bridge unlock - table-driven mapping from milestone actions to features.
//!
//! Each rule row declares which recorded action unlocks which feature; a
//! new feature is added by adding a row, never a branch. Evaluation is a
//! pure function of the action set. Monotonicity lives in [`advance`]:
//! it only ever inserts into the caller's unlocked set, so a feature stays
//! unlocked even if its predicate would no longer hold.
//!
//! [`advance`]: UnlockRuleEngine::advance

#![deny(unsafe_code)]

use bridge_types::{ActionId, FeatureId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the unlock table: `feature` unlocks once `requires` has been
/// performed. Several rows for the same feature act as alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRule {
    pub feature: FeatureId,
    pub requires: ActionId,
}

impl UnlockRule {
    pub fn new(feature: FeatureId, requires: ActionId) -> Self {
        Self { feature, requires }
    }
}

/// Rule engine over the unlock table.
#[derive(Clone, Debug)]
pub struct UnlockRuleEngine {
    rules: Vec<UnlockRule>,
}

impl UnlockRuleEngine {
    /// Engine over a custom rule table.
    pub fn new(rules: Vec<UnlockRule>) -> Self {
        Self { rules }
    }

    /// Engine with the product's declared unlock table.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            UnlockRule::new(FeatureId::Messaging, ActionId::FirstContactMade),
            UnlockRule::new(FeatureId::Blockchain, ActionId::MeetingCompleted),
            UnlockRule::new(FeatureId::Payments, ActionId::ContractSigned),
            UnlockRule::new(FeatureId::Orders, ActionId::OrderMilestoneCreated),
            UnlockRule::new(FeatureId::Logistics, ActionId::OrderMilestoneCreated),
            UnlockRule::new(FeatureId::Inspection, ActionId::OrderMilestoneCreated),
        ])
    }

    /// Append a rule row.
    pub fn add_rule(&mut self, rule: UnlockRule) {
        self.rules.push(rule);
    }

    /// The rule table, in declaration order.
    pub fn rules(&self) -> &[UnlockRule] {
        &self.rules
    }

    /// Features whose predicate holds over the given action set. Pure and
    /// idempotent; the caller owns monotonicity (see [`advance`]).
    ///
    /// [`advance`]: UnlockRuleEngine::advance
    pub fn evaluate(&self, performed: &BTreeSet<ActionId>) -> BTreeSet<FeatureId> {
        self.rules
            .iter()
            .filter(|rule| performed.contains(&rule.requires))
            .map(|rule| rule.feature)
            .collect()
    }

    /// Re-evaluate after a ledger mutation and grow `unlocked` in place.
    /// Only ever inserts: an already-unlocked feature is never removed,
    /// even when its predicate no longer holds against `performed`.
    /// Returns the newly unlocked features in table order.
    pub fn advance(
        &self,
        performed: &BTreeSet<ActionId>,
        unlocked: &mut BTreeSet<FeatureId>,
    ) -> Vec<FeatureId> {
        let mut newly = Vec::new();
        for rule in &self.rules {
            if performed.contains(&rule.requires) && unlocked.insert(rule.feature) {
                newly.push(rule.feature);
            }
        }
        newly
    }
}

impl Default for UnlockRuleEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
