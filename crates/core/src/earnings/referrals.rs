//! Referral progress tracking and portal summary figures

use novaearn_domain::{Referral, ReferralStatus};
use rust_decimal::Decimal;
use serde::Serialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// One pill of the referral progress tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralStep {
    pub status: ReferralStatus,
    pub done: bool,
}

/// Whether `step` is highlighted for a referral currently at `status`.
///
/// A monotonic prefix: every step up to and including the current status.
pub const fn is_step_done(step: ReferralStatus, status: ReferralStatus) -> bool {
    step.index() <= status.index()
}

/// The full tracker row for a referral at `status`.
pub fn progress(status: ReferralStatus) -> Vec<ReferralStep> {
    ReferralStatus::ORDER
        .iter()
        .map(|&step| ReferralStep { status: step, done: is_step_done(step, status) })
        .collect()
}

/// Headline figures for the referral link card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReferralSummary {
    /// Referrals submitted
    pub submitted: usize,
    /// Referrals that reached install or beyond
    pub installs: usize,
    /// Pending plus paid earnings
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub earnings: Decimal,
}

/// Portal summary figures derived from the referral records.
pub fn summarize(referrals: &[Referral]) -> ReferralSummary {
    ReferralSummary {
        submitted: referrals.len(),
        installs: referrals
            .iter()
            .filter(|r| is_step_done(ReferralStatus::Install, r.status))
            .count(),
        earnings: referrals.iter().map(|r| r.earnings).sum(),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn referral(id: &str, status: ReferralStatus, earnings: Decimal) -> Referral {
        Referral {
            id: id.to_string(),
            name: "Someone".to_string(),
            status,
            earnings,
            last_update: "Dec 14".to_string(),
        }
    }

    #[test]
    fn install_marks_prefix_done() {
        let steps = progress(ReferralStatus::Install);
        let done: Vec<ReferralStatus> =
            steps.iter().filter(|s| s.done).map(|s| s.status).collect();
        assert_eq!(
            done,
            vec![
                ReferralStatus::Submitted,
                ReferralStatus::Qualified,
                ReferralStatus::Appt,
                ReferralStatus::Install
            ]
        );
        assert!(!steps[4].done);
        assert_eq!(steps[4].status, ReferralStatus::Paid);
    }

    #[test]
    fn step_done_iff_index_not_greater() {
        for step in ReferralStatus::ORDER {
            for status in ReferralStatus::ORDER {
                assert_eq!(is_step_done(step, status), step.index() <= status.index());
            }
        }
    }

    #[test]
    fn submitted_only_marks_first_step() {
        let steps = progress(ReferralStatus::Submitted);
        assert_eq!(steps.iter().filter(|s| s.done).count(), 1);
    }

    #[test]
    fn summary_counts_installs_and_earnings() {
        let referrals = vec![
            referral("REF-0012", ReferralStatus::Qualified, dec!(50)),
            referral("REF-0015", ReferralStatus::Install, dec!(250)),
            referral("REF-0018", ReferralStatus::Submitted, dec!(0)),
            referral("REF-0021", ReferralStatus::Paid, dec!(400)),
        ];
        let summary = summarize(&referrals);
        assert_eq!(summary.submitted, 4);
        assert_eq!(summary.installs, 2);
        assert_eq!(summary.earnings, dec!(700));
    }
}
