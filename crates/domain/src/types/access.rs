//! Brands, roles and navigation views
//!
//! These three enums define who is looking at the dashboard, which line of
//! business is in scope, and which panel is open.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Line of business used to scope deals and figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Solar,
    Roofing,
}

impl_domain_status_conversions!(Brand {
    Solar => "solar",
    Roofing => "roofing",
});

impl Brand {
    /// Every brand, in selector order.
    pub const ALL: [Self; 2] = [Self::Solar, Self::Roofing];

    /// Display label for the brand selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Solar => "Nova NRG Solar",
            Self::Roofing => "Nova NRG Roofing",
        }
    }
}

/// Whether a role belongs to staff or to the outside portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum RoleClass {
    Internal,
    External,
}

/// Dashboard user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Setter,
    #[default]
    Closer,
    Manager,
    Ops,
    Admin,
    Customer,
    Partner,
}

impl_domain_status_conversions!(Role {
    Setter => "setter",
    Closer => "closer",
    Manager => "manager",
    Ops => "ops",
    Admin => "admin",
    Customer => "customer",
    Partner => "partner",
});

impl Role {
    /// Every role, in selector order.
    pub const ALL: [Self; 7] = [
        Self::Setter,
        Self::Closer,
        Self::Manager,
        Self::Ops,
        Self::Admin,
        Self::Customer,
        Self::Partner,
    ];

    /// Display label for the role selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Setter => "Appointment Setter",
            Self::Closer => "Closer",
            Self::Manager => "Manager",
            Self::Ops => "Ops",
            Self::Admin => "Admin",
            Self::Customer => "Customer",
            Self::Partner => "Referral Partner",
        }
    }

    /// Staff roles see the commission console, everyone else the portal.
    pub const fn class(&self) -> RoleClass {
        match self {
            Self::Setter | Self::Closer | Self::Manager | Self::Ops | Self::Admin => {
                RoleClass::Internal
            }
            Self::Customer | Self::Partner => RoleClass::External,
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self.class(), RoleClass::External)
    }
}

/// Navigation key for a dashboard panel
///
/// The union of both role menus. Which keys a role may open is decided by
/// the navigation router in `novaearn-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Pipeline,
    Payouts,
    Advances,
    Approvals,
    Settings,
    Home,
    Referrals,
    Leaderboard,
}

impl_domain_status_conversions!(View {
    Dashboard => "dashboard",
    Pipeline => "pipeline",
    Payouts => "payouts",
    Advances => "advances",
    Approvals => "approvals",
    Settings => "settings",
    Home => "home",
    Referrals => "referrals",
    Leaderboard => "leaderboard",
});

impl View {
    /// Every navigation key across both menus.
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Pipeline,
        Self::Payouts,
        Self::Advances,
        Self::Approvals,
        Self::Settings,
        Self::Home,
        Self::Referrals,
        Self::Leaderboard,
    ];
}
