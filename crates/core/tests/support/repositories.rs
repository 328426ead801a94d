//! Mock repository implementations for testing
//!
//! Provides an in-memory mock for the earnings port, enabling deterministic
//! tests without touching the fixture loader.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use novaearn_core::EarningsRepository;
use novaearn_domain::{
    AdvanceLedger, ApprovalKind, Deal, EarningsDataset, LeaderboardRow, MonthlyTrendPoint,
    NovaEarnError, PayoutPeriod, Referral, ReferralPayout, Result as DomainResult, TimelineEvent,
};

/// In-memory mock for `EarningsRepository`.
///
/// Serves a fixed data set and counts deal reads so tests can assert that
/// figures are recomputed per render.
#[derive(Default, Clone)]
pub struct MockEarningsRepository {
    dataset: Arc<EarningsDataset>,
    deal_reads: Arc<AtomicUsize>,
}

impl MockEarningsRepository {
    /// Create a new mock seeded with the provided data set.
    pub fn new(dataset: EarningsDataset) -> Self {
        Self { dataset: Arc::new(dataset), deal_reads: Arc::new(AtomicUsize::new(0)) }
    }

    /// Convenience helper for adding a single deal to the mock.
    pub fn with_deal(mut self, deal: Deal) -> Self {
        Arc::make_mut(&mut self.dataset).deals.push(deal);
        self
    }

    pub fn deal_reads(&self) -> usize {
        self.deal_reads.load(Ordering::SeqCst)
    }
}

impl EarningsRepository for MockEarningsRepository {
    fn deals(&self) -> DomainResult<Vec<Deal>> {
        self.deal_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.dataset.deals.clone())
    }

    fn timeline(&self) -> DomainResult<Vec<TimelineEvent>> {
        Ok(self.dataset.timeline.clone())
    }

    fn payout_periods(&self) -> DomainResult<Vec<PayoutPeriod>> {
        Ok(self.dataset.payout_periods.clone())
    }

    fn referrals(&self) -> DomainResult<Vec<Referral>> {
        Ok(self.dataset.referrals.clone())
    }

    fn monthly_trend(&self) -> DomainResult<Vec<MonthlyTrendPoint>> {
        Ok(self.dataset.monthly_trend.clone())
    }

    fn leaderboard(&self) -> DomainResult<Vec<LeaderboardRow>> {
        Ok(self.dataset.leaderboard.clone())
    }

    fn advance_ledger(&self) -> DomainResult<AdvanceLedger> {
        Ok(self.dataset.advances.clone())
    }

    fn approvals(&self) -> DomainResult<Vec<ApprovalKind>> {
        Ok(self.dataset.approvals.clone())
    }

    fn referral_payouts(&self) -> DomainResult<Vec<ReferralPayout>> {
        Ok(self.dataset.referral_payouts.clone())
    }
}

/// Repository whose every read fails, for error propagation tests.
#[derive(Default, Clone, Copy)]
pub struct FailingEarningsRepository;

fn unavailable<T>() -> DomainResult<T> {
    Err(NovaEarnError::Fixture("earnings source unavailable".to_string()))
}

impl EarningsRepository for FailingEarningsRepository {
    fn deals(&self) -> DomainResult<Vec<Deal>> {
        unavailable()
    }

    fn timeline(&self) -> DomainResult<Vec<TimelineEvent>> {
        unavailable()
    }

    fn payout_periods(&self) -> DomainResult<Vec<PayoutPeriod>> {
        unavailable()
    }

    fn referrals(&self) -> DomainResult<Vec<Referral>> {
        unavailable()
    }

    fn monthly_trend(&self) -> DomainResult<Vec<MonthlyTrendPoint>> {
        unavailable()
    }

    fn leaderboard(&self) -> DomainResult<Vec<LeaderboardRow>> {
        unavailable()
    }

    fn advance_ledger(&self) -> DomainResult<AdvanceLedger> {
        unavailable()
    }

    fn approvals(&self) -> DomainResult<Vec<ApprovalKind>> {
        unavailable()
    }

    fn referral_payouts(&self) -> DomainResult<Vec<ReferralPayout>> {
        unavailable()
    }
}
