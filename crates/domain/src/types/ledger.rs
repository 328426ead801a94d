//! Payout, advance, approval and timeline records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Settlement state of a payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "UPPERCASE")]
pub enum PayoutStatus {
    Paid,
    Pending,
}

impl_domain_status_conversions!(PayoutStatus {
    Paid => "PAID",
    Pending => "PENDING",
});

/// Weekly commission payout period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PayoutPeriod {
    /// Date range label, e.g. `"Nov 18–Nov 24"`
    pub period: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total: Decimal,
    pub status: PayoutStatus,
}

/// Monthly commission figures for the trend chart
///
/// Display only; never recomputed from deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MonthlyTrendPoint {
    pub month: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub pending: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub locked: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub paid: Decimal,
}

/// Milestone or blocker notification
///
/// `at` is a display label, not a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimelineEvent {
    pub at: String,
    pub title: String,
    pub detail: String,
}

/// Single movement on the advance ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AdvanceEntry {
    pub at: String,
    pub description: String,
    /// Signed amount; negative for deductions
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub amount: Decimal,
}

impl AdvanceEntry {
    pub fn is_deduction(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// Commission advances issued against future payouts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AdvanceLedger {
    /// Outstanding balance
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub balance: Decimal,
    /// Amount withheld from the next payout
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub next_deduction: Decimal,
    /// Advances issued this year
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub ytd_issued: Decimal,
    #[serde(default)]
    pub history: Vec<AdvanceEntry>,
}

/// Item waiting in the ops/admin approval queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ApprovalKind {
    #[serde(rename = "Adjustment pending")]
    AdjustmentPending,
    #[serde(rename = "Chargeback review")]
    ChargebackReview,
    #[serde(rename = "Plan version change")]
    PlanVersionChange,
}

impl_domain_status_conversions!(ApprovalKind {
    AdjustmentPending => "Adjustment pending",
    ChargebackReview => "Chargeback review",
    PlanVersionChange => "Plan version change",
});

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn payout_status_uses_upper_case() {
        assert_eq!(serde_json::to_string(&PayoutStatus::Pending).unwrap(), "\"PENDING\"");
        assert_eq!("paid".parse::<PayoutStatus>().unwrap(), PayoutStatus::Paid);
    }

    #[test]
    fn negative_entries_are_deductions() {
        let issued =
            AdvanceEntry { at: "Dec 05".into(), description: "Advance issued".into(), amount: dec!(500) };
        let deducted =
            AdvanceEntry { at: "Dec 08".into(), description: "Deduction".into(), amount: dec!(-150) };
        assert!(!issued.is_deduction());
        assert!(deducted.is_deduction());
    }
}
