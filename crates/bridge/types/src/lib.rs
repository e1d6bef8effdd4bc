//! Bridge Types - shared identifiers for the progressive disclosure core
#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);
impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}
impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated user. Created at login; role never changes at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: ActorRole,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: ActorId, role: ActorRole, display_name: impl Into<String>) -> Self {
        Self {
            id,
            role,
            display_name: display_name.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Company,
    Partner,
    Administrator,
}

impl ActorRole {
    pub const ALL: [ActorRole; 3] = [
        ActorRole::Company,
        ActorRole::Partner,
        ActorRole::Administrator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActorRole::Company => "company",
            ActorRole::Partner => "partner",
            ActorRole::Administrator => "administrator",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActorRole {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(ActorRole::Company),
            "partner" => Ok(ActorRole::Partner),
            "administrator" => Ok(ActorRole::Administrator),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// Discrete milestone actions an actor can perform on the platform.
/// The enumeration is fixed; anything else reported by a page is rejected
/// at the parse boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    FirstContactMade,
    MeetingCompleted,
    ContractSigned,
    OrderMilestoneCreated,
}

impl ActionId {
    pub const ALL: [ActionId; 4] = [
        ActionId::FirstContactMade,
        ActionId::MeetingCompleted,
        ActionId::ContractSigned,
        ActionId::OrderMilestoneCreated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionId::FirstContactMade => "first-contact-made",
            ActionId::MeetingCompleted => "meeting-completed",
            ActionId::ContractSigned => "contract-signed",
            ActionId::OrderMilestoneCreated => "order-milestone-created",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionId {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-contact-made" => Ok(ActionId::FirstContactMade),
            "meeting-completed" => Ok(ActionId::MeetingCompleted),
            "contract-signed" => Ok(ActionId::ContractSigned),
            "order-milestone-created" => Ok(ActionId::OrderMilestoneCreated),
            other => Err(UnknownActionError(other.to_string())),
        }
    }
}

/// Gated capability groups unlocked as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureId {
    Messaging,
    Blockchain,
    Payments,
    Orders,
    Logistics,
    Inspection,
}

impl FeatureId {
    pub const ALL: [FeatureId; 6] = [
        FeatureId::Messaging,
        FeatureId::Blockchain,
        FeatureId::Payments,
        FeatureId::Orders,
        FeatureId::Logistics,
        FeatureId::Inspection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::Messaging => "messaging",
            FeatureId::Blockchain => "blockchain",
            FeatureId::Payments => "payments",
            FeatureId::Orders => "orders",
            FeatureId::Logistics => "logistics",
            FeatureId::Inspection => "inspection",
        }
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CapabilityId(pub String);
impl CapabilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
impl std::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown milestone action: {0}")]
pub struct UnknownActionError(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown actor role: {0}")]
pub struct UnknownRoleError(pub String);
