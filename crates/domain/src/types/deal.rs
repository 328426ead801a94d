//! Deal records and the stage sequence

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::access::Brand;
use crate::constants::NO_VALUE_SENTINEL;
use crate::impl_domain_status_conversions;

/// One step in the ten-step progression from lead to activation
///
/// Declaration order is sequence order. Nothing enforces that a deal only
/// moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Stage {
    #[serde(rename = "Lead")]
    Lead,
    #[serde(rename = "Appt Set")]
    ApptSet,
    #[serde(rename = "Sit Completed")]
    SitCompleted,
    #[serde(rename = "Closed")]
    Closed,
    #[serde(rename = "Site Survey")]
    SiteSurvey,
    #[serde(rename = "Permitting")]
    Permitting,
    #[serde(rename = "Install Scheduled")]
    InstallScheduled,
    #[serde(rename = "Installed")]
    Installed,
    #[serde(rename = "PTO")]
    Pto,
    #[serde(rename = "Activated")]
    Activated,
}

impl_domain_status_conversions!(Stage {
    Lead => "Lead",
    ApptSet => "Appt Set",
    SitCompleted => "Sit Completed",
    Closed => "Closed",
    SiteSurvey => "Site Survey",
    Permitting => "Permitting",
    InstallScheduled => "Install Scheduled",
    Installed => "Installed",
    Pto => "PTO",
    Activated => "Activated",
});

impl Stage {
    /// The full stage sequence, in order.
    pub const SEQUENCE: [Self; 10] = [
        Self::Lead,
        Self::ApptSet,
        Self::SitCompleted,
        Self::Closed,
        Self::SiteSurvey,
        Self::Permitting,
        Self::InstallScheduled,
        Self::Installed,
        Self::Pto,
        Self::Activated,
    ];

    /// Position of this stage in [`Stage::SEQUENCE`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Commercial status of a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DealStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    /// Terminal status; the deal no longer progresses.
    #[serde(rename = "Closed")]
    Closed,
}

impl_domain_status_conversions!(DealStatus {
    Active => "Active",
    OnHold => "On Hold",
    Closed => "Closed",
});

/// A single customer sales opportunity
///
/// Contract value and the three commission amounts may be absent when the
/// upstream ledger has not reported them. Consumers that sum them treat an
/// absent value as zero; see the aggregator in `novaearn-core`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Deal {
    pub id: String,
    pub customer: String,
    pub city: String,
    /// US two-letter state code
    pub state: String,
    pub brand: Brand,
    pub stage: Stage,
    pub status: DealStatus,
    /// Nameplate capacity; only meaningful for solar deals
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub kw: Option<Decimal>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub contract_value: Option<Decimal>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub adders: Decimal,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub commission_pending: Option<Decimal>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub commission_locked: Option<Decimal>,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "string | null"))]
    pub commission_paid: Option<Decimal>,
    /// Free-text pay date; `None` when no payment is scheduled
    #[serde(default, deserialize_with = "deserialize_pay_label")]
    pub expected_next_pay: Option<String>,
    /// Blocking reasons; empty means the deal is on track
    #[serde(default)]
    pub blocks: Vec<String>,
}

impl Deal {
    pub fn is_blocked(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// `"City, ST"` as shown in the deals table.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Expected pay label, or the placeholder when nothing is scheduled.
    pub fn expected_next_pay_label(&self) -> &str {
        self.expected_next_pay.as_deref().unwrap_or(NO_VALUE_SENTINEL)
    }
}

/// Accepts `null`, an empty string or a dash placeholder as "no pay date".
fn deserialize_pay_label<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|label| {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == NO_VALUE_SENTINEL || trimmed == "-" {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
