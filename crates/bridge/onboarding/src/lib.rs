//! Bridge onboarding - guided-introduction state for company actors.
//!
//! A two-state machine with a one-directional transition. Company-role
//! actors start `Active` and move to `Complete` exactly once, when they
//! finish the walkthrough; partner and administrator actors start and stay
//! `Complete`. Completion counts as the actor's first milestone: the facade
//! records [`COMPLETION_MILESTONE`] alongside the transition.

#![deny(unsafe_code)]

use bridge_types::{ActionId, ActorRole};
use serde::{Deserialize, Serialize};

/// Milestone recorded unconditionally when onboarding completes.
pub const COMPLETION_MILESTONE: ActionId = ActionId::FirstContactMade;

/// Whether an actor has finished the guided introduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingState {
    /// The walkthrough owns the screen; every capability but the Dashboard
    /// is suppressed.
    Active,
    /// Terminal. There is no way back to `Active`.
    Complete,
}

impl OnboardingState {
    /// Initial state for a newly registered actor of the given role.
    pub fn initial_for(role: ActorRole) -> Self {
        match role {
            ActorRole::Company => OnboardingState::Active,
            ActorRole::Partner | ActorRole::Administrator => OnboardingState::Complete,
        }
    }

    /// Rebuild the state from the persisted completion flag.
    pub fn from_flag(complete: bool) -> Self {
        if complete {
            OnboardingState::Complete
        } else {
            OnboardingState::Active
        }
    }

    /// The persisted completion flag.
    pub fn as_flag(self) -> bool {
        self.is_complete()
    }

    /// Fire the one-directional transition. Returns `true` only on the
    /// call that actually moved `Active` -> `Complete`; later calls are
    /// no-ops.
    pub fn complete(&mut self) -> bool {
        match self {
            OnboardingState::Active => {
                *self = OnboardingState::Complete;
                true
            }
            OnboardingState::Complete => false,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, OnboardingState::Active)
    }

    pub fn is_complete(self) -> bool {
        matches!(self, OnboardingState::Complete)
    }
}
