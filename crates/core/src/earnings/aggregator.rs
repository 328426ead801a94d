//! Summary figures over a scoped set of deals
//!
//! # Null handling
//!
//! The two policies below are intentionally different and must stay that
//! way:
//!
//! - **Sums** (`pending`, `locked`, `paid`, `contract_value_total`) treat an
//!   absent amount as zero.
//! - **`average_kilowatts`** excludes absent capacities from both the
//!   numerator and the denominator, and reports [`KilowattAverage::NoData`]
//!   when no deal has a capacity.
//!
//! Every figure is recomputed from scratch on each call.

use novaearn_domain::constants::{NO_VALUE_SENTINEL, STAGE_MIX_PREFIX};
use novaearn_domain::{Deal, DealStatus, Stage};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Mean nameplate capacity, or the explicit absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KilowattAverage {
    /// No deal in scope reports a capacity
    NoData,
    /// Mean over the deals that report one
    Mean(#[cfg_attr(feature = "ts-gen", ts(type = "string"))] Decimal),
}

impl KilowattAverage {
    /// One decimal place, halves rounded away from zero, or the
    /// placeholder for `NoData`.
    pub fn display(&self) -> String {
        match self {
            Self::NoData => NO_VALUE_SENTINEL.to_string(),
            Self::Mean(value) => {
                let rounded =
                    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.1}")
            }
        }
    }
}

/// Number of deals sitting at one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

/// Every dashboard figure derived from a deal subsequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DealAggregate {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub pending: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub locked: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub paid: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub contract_value_total: Decimal,
    pub active_count: usize,
    pub blocked_count: usize,
    pub average_kilowatts: KilowattAverage,
    /// Counts for the first seven stages only
    pub stage_counts: Vec<StageCount>,
}

/// Compute all figures for `deals`.
pub fn aggregate(deals: &[&Deal]) -> DealAggregate {
    DealAggregate {
        pending: sum_or_zero(deals, |d| d.commission_pending),
        locked: sum_or_zero(deals, |d| d.commission_locked),
        paid: sum_or_zero(deals, |d| d.commission_paid),
        contract_value_total: sum_or_zero(deals, |d| d.contract_value),
        active_count: deals.iter().filter(|d| d.status == DealStatus::Active).count(),
        blocked_count: deals.iter().filter(|d| d.is_blocked()).count(),
        average_kilowatts: average_kilowatts(deals),
        stage_counts: stage_counts(deals),
    }
}

/// Sum of a nullable amount, absent counted as zero.
fn sum_or_zero<F>(deals: &[&Deal], field: F) -> Decimal
where
    F: Fn(&Deal) -> Option<Decimal>,
{
    deals.iter().map(|deal| field(deal).unwrap_or(Decimal::ZERO)).sum()
}

/// Mean over present capacities only.
pub fn average_kilowatts(deals: &[&Deal]) -> KilowattAverage {
    let present: Vec<Decimal> = deals.iter().filter_map(|deal| deal.kw).collect();
    if present.is_empty() {
        return KilowattAverage::NoData;
    }

    let total: Decimal = present.iter().copied().sum();
    KilowattAverage::Mean(total / Decimal::from(present.len()))
}

/// Deal counts for the charted stage prefix.
pub fn stage_counts(deals: &[&Deal]) -> Vec<StageCount> {
    Stage::SEQUENCE
        .iter()
        .take(STAGE_MIX_PREFIX)
        .map(|&stage| StageCount {
            stage,
            count: deals.iter().filter(|deal| deal.stage == stage).count(),
        })
        .collect()
}
