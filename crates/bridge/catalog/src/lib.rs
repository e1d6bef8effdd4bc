//! Bridge catalog - static, role-indexed declaration of capabilities.
//!
//! Configuration data only: every navigable surface of the shell is
//! declared here once, with its role and optional gating feature, and is
//! never mutated at runtime. Declaration order is product order and must
//! survive into the composed menu.

#![deny(unsafe_code)]

use bridge_types::{ActorRole, CapabilityId, FeatureId};
use serde::{Deserialize, Serialize};

/// A single declared capability (menu entry / navigable surface).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub id: CapabilityId,
    pub icon: String,
    pub label: String,
    pub route: String,
    /// `None` marks a role-agnostic entry (the Dashboard).
    pub role: Option<ActorRole>,
    /// Present when visibility depends on a feature unlock.
    pub gate: Option<FeatureId>,
}

impl Capability {
    pub fn new(
        id: impl Into<String>,
        icon: impl Into<String>,
        label: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            id: CapabilityId::new(id),
            icon: icon.into(),
            label: label.into(),
            route: route.into(),
            role: None,
            gate: None,
        }
    }

    pub fn with_role(mut self, role: ActorRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_gate(mut self, gate: FeatureId) -> Self {
        self.gate = Some(gate);
        self
    }
}

/// Ordered, immutable capability declarations for every role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCatalog {
    entries: Vec<Capability>,
}

impl CapabilityCatalog {
    /// Catalog over custom declarations.
    pub fn new(entries: Vec<Capability>) -> Self {
        Self { entries }
    }

    /// The product catalog as shipped: the role-agnostic Dashboard first,
    /// then company, partner and administrator entries. Gates mirror the
    /// default unlock table; partner and administrator entries are ungated.
    pub fn with_defaults() -> Self {
        use ActorRole::{Administrator, Company, Partner};

        Self::new(vec![
            Capability::new("dashboard", "layout-dashboard", "Dashboard", "/dashboard"),
            // Company workflow
            Capability::new("expo", "store", "Expo", "/expo").with_role(Company),
            Capability::new("partners", "users", "Partner Matching", "/partners")
                .with_role(Company),
            Capability::new("market", "trending-up", "Market Intelligence", "/market")
                .with_role(Company),
            Capability::new("training", "graduation-cap", "Training", "/training")
                .with_role(Company),
            Capability::new("messages", "message-square", "Messages", "/messages")
                .with_role(Company)
                .with_gate(FeatureId::Messaging),
            Capability::new("verification", "shield-check", "Verification", "/verification")
                .with_role(Company),
            Capability::new("blockchain", "handshake", "Blockchain Agreements", "/blockchain")
                .with_role(Company)
                .with_gate(FeatureId::Blockchain),
            Capability::new("payments", "dollar-sign", "Payments", "/payments")
                .with_role(Company)
                .with_gate(FeatureId::Payments),
            Capability::new("orders", "package", "Orders", "/orders")
                .with_role(Company)
                .with_gate(FeatureId::Orders),
            Capability::new("logistics", "truck", "Logistics", "/logistics")
                .with_role(Company)
                .with_gate(FeatureId::Logistics),
            Capability::new("inspection", "clipboard-check", "Inspection", "/inspection")
                .with_role(Company)
                .with_gate(FeatureId::Inspection),
            Capability::new("analytics", "bar-chart-3", "Analytics", "/analytics")
                .with_role(Company),
            Capability::new("settings", "settings", "Settings", "/settings").with_role(Company),
            // Partner workspace
            Capability::new("profile", "building-2", "My Profile", "/profile").with_role(Partner),
            Capability::new("companies", "users", "Companies", "/companies").with_role(Partner),
            Capability::new("meetings", "calendar", "Meetings", "/meetings").with_role(Partner),
            Capability::new("messages", "message-square", "Messages", "/messages")
                .with_role(Partner),
            Capability::new("training", "graduation-cap", "Training", "/training")
                .with_role(Partner),
            Capability::new("settings", "settings", "Settings", "/settings").with_role(Partner),
            // Administration
            Capability::new("users", "users", "User Management", "/admin/users")
                .with_role(Administrator),
            Capability::new("content", "file-text", "Content", "/admin/content")
                .with_role(Administrator),
            Capability::new("stats", "bar-chart-3", "Statistics", "/admin/stats")
                .with_role(Administrator),
            Capability::new(
                "market-intelligence",
                "trending-up",
                "Market Intelligence",
                "/admin/market",
            )
            .with_role(Administrator),
            Capability::new("training", "graduation-cap", "Training", "/admin/training")
                .with_role(Administrator),
            Capability::new("analytics", "bar-chart-3", "Analytics", "/analytics")
                .with_role(Administrator),
            Capability::new("settings", "settings", "Configuration", "/admin/settings")
                .with_role(Administrator),
        ])
    }

    /// Every declared entry, in declaration order.
    pub fn entries(&self) -> &[Capability] {
        &self.entries
    }

    /// Role-agnostic entries, in declaration order.
    pub fn base_entries(&self) -> impl Iterator<Item = &Capability> {
        self.entries.iter().filter(|c| c.role.is_none())
    }

    /// Entries declared for the given role, in declaration order.
    pub fn entries_for_role(&self, role: ActorRole) -> impl Iterator<Item = &Capability> {
        self.entries.iter().filter(move |c| c.role == Some(role))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
