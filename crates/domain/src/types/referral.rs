//! Referral records and the referral leaderboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ledger::PayoutStatus;
use crate::impl_domain_status_conversions;

/// Five-step referral progression
///
/// Declaration order is progression order: Submitted < Qualified < Appt <
/// Install < Paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ReferralStatus {
    Submitted,
    Qualified,
    Appt,
    Install,
    Paid,
}

impl_domain_status_conversions!(ReferralStatus {
    Submitted => "Submitted",
    Qualified => "Qualified",
    Appt => "Appt",
    Install => "Install",
    Paid => "Paid",
});

impl ReferralStatus {
    /// The fixed progression order.
    pub const ORDER: [Self; 5] =
        [Self::Submitted, Self::Qualified, Self::Appt, Self::Install, Self::Paid];

    /// Position of this status in [`ReferralStatus::ORDER`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// A lead submitted by a customer or referral partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Referral {
    pub id: String,
    pub name: String,
    pub status: ReferralStatus,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub earnings: Decimal,
    pub last_update: String,
}

/// Precomputed leaderboard entry
///
/// Not derived from [`Referral`] records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LeaderboardRow {
    pub name: String,
    #[serde(alias = "points")]
    pub conversions: u32,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub earnings: Decimal,
}

/// A payout made to an external referrer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralPayout {
    pub at: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: Decimal,
    pub status: PayoutStatus,
}
