//! Port interfaces for earnings data
//!
//! These traits define the boundary between core business logic and the
//! data-access collaborator (fixture store today, a commission ledger and CRM
//! in production).

use novaearn_domain::{
    AdvanceLedger, ApprovalKind, Deal, LeaderboardRow, MonthlyTrendPoint, PayoutPeriod, Referral,
    ReferralPayout, Result, TimelineEvent,
};

/// Read-only source of every collection the dashboard shows
///
/// Implementations return collections in their canonical order; the
/// selector relies on deal order being stable between calls.
pub trait EarningsRepository: Send + Sync {
    /// All deals across brands
    fn deals(&self) -> Result<Vec<Deal>>;

    /// Global milestone and blocker feed
    fn timeline(&self) -> Result<Vec<TimelineEvent>>;

    /// Weekly commission payout periods
    fn payout_periods(&self) -> Result<Vec<PayoutPeriod>>;

    /// Referrals submitted by the current external user
    fn referrals(&self) -> Result<Vec<Referral>>;

    /// Monthly pending/locked/paid figures
    fn monthly_trend(&self) -> Result<Vec<MonthlyTrendPoint>>;

    /// Precomputed referral leaderboard
    fn leaderboard(&self) -> Result<Vec<LeaderboardRow>>;

    /// Advance balance and history
    fn advance_ledger(&self) -> Result<AdvanceLedger>;

    /// Items waiting for ops/admin approval
    fn approvals(&self) -> Result<Vec<ApprovalKind>>;

    /// Payouts made to the current external user
    fn referral_payouts(&self) -> Result<Vec<ReferralPayout>>;
}
