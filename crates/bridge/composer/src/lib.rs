//! Bridge composer - turns catalog, onboarding state and unlocks into the
//! menu handed to the navigation shell.
//!
//! `compose` is a pure function of its three inputs. Role-agnostic entries
//! always lead; while onboarding is active every other entry is suppressed
//! outright (absent, not disabled); afterwards gated entries render
//! disabled until their feature unlocks. Declaration order is never
//! re-sorted.

#![deny(unsafe_code)]

use bridge_catalog::{Capability, CapabilityCatalog};
use bridge_onboarding::OnboardingState;
use bridge_types::{Actor, CapabilityId, FeatureId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Render state of a composed capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityState {
    /// Navigable.
    Enabled,
    /// Rendered grey with a tooltip; clicking must not navigate.
    Disabled,
}

/// One menu entry as handed to the navigation shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityView {
    pub id: CapabilityId,
    pub icon: String,
    pub label: String,
    pub route: String,
    pub state: CapabilityState,
}

/// Composes the ordered, annotated capability list for one actor.
pub struct CapabilityComposer {
    catalog: Arc<CapabilityCatalog>,
}

impl CapabilityComposer {
    pub fn new(catalog: Arc<CapabilityCatalog>) -> Self {
        Self { catalog }
    }

    /// Composer over the product's default catalog.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(CapabilityCatalog::with_defaults()))
    }

    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Build the menu for `actor`. Role-agnostic entries come first,
    /// unconditionally. While onboarding is active everything else is
    /// suppressed. A role with no declared entries degrades to the
    /// role-agnostic list alone - fail closed, never another role's set.
    pub fn compose(
        &self,
        actor: &Actor,
        onboarding: OnboardingState,
        unlocked: &BTreeSet<FeatureId>,
    ) -> Vec<CapabilityView> {
        let mut views: Vec<CapabilityView> = self
            .catalog
            .base_entries()
            .map(|entry| annotate(entry, unlocked))
            .collect();

        if onboarding.is_active() {
            return views;
        }

        views.extend(
            self.catalog
                .entries_for_role(actor.role)
                .map(|entry| annotate(entry, unlocked)),
        );
        views
    }
}

impl Default for CapabilityComposer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn annotate(entry: &Capability, unlocked: &BTreeSet<FeatureId>) -> CapabilityView {
    let state = match entry.gate {
        None => CapabilityState::Enabled,
        Some(gate) if unlocked.contains(&gate) => CapabilityState::Enabled,
        Some(_) => CapabilityState::Disabled,
    };
    CapabilityView {
        id: entry.id.clone(),
        icon: entry.icon.clone(),
        label: entry.label.clone(),
        route: entry.route.clone(),
        state,
    }
}
