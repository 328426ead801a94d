//! Complete fixture data set
//!
//! Mirrors the collections a data-access collaborator (commission ledger and
//! CRM) must supply.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::deal::Deal;
use super::ledger::{AdvanceLedger, ApprovalKind, MonthlyTrendPoint, PayoutPeriod, TimelineEvent};
use super::referral::{LeaderboardRow, Referral, ReferralPayout};

/// Every collection the dashboard reads
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EarningsDataset {
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub payout_periods: Vec<PayoutPeriod>,
    #[serde(default)]
    pub referrals: Vec<Referral>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardRow>,
    #[serde(default)]
    pub advances: AdvanceLedger,
    #[serde(default)]
    pub approvals: Vec<ApprovalKind>,
    #[serde(default)]
    pub referral_payouts: Vec<ReferralPayout>,
}

impl EarningsDataset {
    /// Identifier of the first deal, used as the initial selection.
    pub fn first_deal_id(&self) -> Option<&str> {
        self.deals.first().map(|deal| deal.id.as_str())
    }
}
