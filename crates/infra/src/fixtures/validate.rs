//! Structural checks applied when a fixture data set is loaded

use std::collections::HashSet;

use novaearn_domain::{Brand, EarningsDataset, NovaEarnError, Result};
use rust_decimal::Decimal;
use tracing::warn;

/// Validate a freshly parsed data set.
///
/// # Errors
/// Returns `NovaEarnError::Fixture` for duplicate deal or referral ids and
/// for negative commission, contract, payout or earnings amounts.
///
/// Capacity on a non-solar deal is logged and accepted.
pub fn validate_dataset(dataset: &EarningsDataset) -> Result<()> {
    let mut deal_ids = HashSet::new();
    for deal in &dataset.deals {
        if !deal_ids.insert(deal.id.as_str()) {
            return Err(NovaEarnError::Fixture(format!("duplicate deal id: {}", deal.id)));
        }

        let amounts = [
            ("contract_value", deal.contract_value),
            ("commission_pending", deal.commission_pending),
            ("commission_locked", deal.commission_locked),
            ("commission_paid", deal.commission_paid),
            ("adders", Some(deal.adders)),
            ("kw", deal.kw),
        ];
        for (field, amount) in amounts {
            ensure_non_negative(&deal.id, field, amount)?;
        }

        if deal.brand != Brand::Solar && deal.kw.is_some() {
            warn!(deal = %deal.id, brand = %deal.brand, "Capacity reported on a non-solar deal");
        }
    }

    let mut referral_ids = HashSet::new();
    for referral in &dataset.referrals {
        if !referral_ids.insert(referral.id.as_str()) {
            return Err(NovaEarnError::Fixture(format!(
                "duplicate referral id: {}",
                referral.id
            )));
        }
        ensure_non_negative(&referral.id, "earnings", Some(referral.earnings))?;
    }

    for period in &dataset.payout_periods {
        ensure_non_negative(&period.period, "total", Some(period.total))?;
    }

    for payout in &dataset.referral_payouts {
        ensure_non_negative(&payout.at, "amount", Some(payout.amount))?;
    }

    Ok(())
}

fn ensure_non_negative(owner: &str, field: &str, amount: Option<Decimal>) -> Result<()> {
    match amount {
        Some(value) if value.is_sign_negative() && !value.is_zero() => Err(
            NovaEarnError::Fixture(format!("{owner}: {field} must not be negative (got {value})")),
        ),
        _ => Ok(()),
    }
}
