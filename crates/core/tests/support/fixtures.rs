//! Builders for the sample data set used across scenarios.

use novaearn_domain::{
    AdvanceEntry, AdvanceLedger, ApprovalKind, Brand, Deal, DealStatus, EarningsDataset,
    LeaderboardRow, MonthlyTrendPoint, PayoutPeriod, PayoutStatus, Referral, ReferralPayout,
    ReferralStatus, Stage, TimelineEvent,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Minimal deal with every optional amount absent.
pub fn bare_deal(id: &str, brand: Brand, stage: Stage) -> Deal {
    Deal {
        id: id.to_string(),
        customer: format!("Customer {id}"),
        city: "Miami".to_string(),
        state: "FL".to_string(),
        brand,
        stage,
        status: DealStatus::Active,
        kw: None,
        contract_value: None,
        adders: Decimal::ZERO,
        commission_pending: None,
        commission_locked: None,
        commission_paid: None,
        expected_next_pay: None,
        blocks: Vec::new(),
    }
}

pub fn seed_deals() -> Vec<Deal> {
    vec![
        Deal {
            customer: "John McCubbin".to_string(),
            kw: Some(dec!(12.3)),
            contract_value: Some(dec!(44144.7)),
            adders: dec!(1250),
            commission_pending: Some(dec!(650)),
            commission_locked: Some(dec!(0)),
            commission_paid: Some(dec!(1200)),
            expected_next_pay: Some("Jan 05".to_string()),
            blocks: vec!["Permit docs missing".to_string()],
            ..bare_deal("OPP-10428", Brand::Solar, Stage::Permitting)
        },
        Deal {
            customer: "Maria Santos".to_string(),
            city: "Orlando".to_string(),
            kw: Some(dec!(9.9)),
            contract_value: Some(dec!(31200)),
            commission_pending: Some(dec!(0)),
            commission_locked: Some(dec!(950)),
            commission_paid: Some(dec!(0)),
            expected_next_pay: Some("Dec 27".to_string()),
            ..bare_deal("OPP-10702", Brand::Solar, Stage::InstallScheduled)
        },
        Deal {
            customer: "Chris Bailey".to_string(),
            city: "Tampa".to_string(),
            status: DealStatus::OnHold,
            contract_value: Some(dec!(18500)),
            commission_pending: Some(dec!(300)),
            commission_locked: Some(dec!(0)),
            commission_paid: Some(dec!(0)),
            blocks: vec!["Financing pending".to_string()],
            ..bare_deal("OPP-11011", Brand::Roofing, Stage::Closed)
        },
    ]
}

pub fn seed_referrals() -> Vec<Referral> {
    let referral = |id: &str, name: &str, status, earnings, last_update: &str| Referral {
        id: id.to_string(),
        name: name.to_string(),
        status,
        earnings,
        last_update: last_update.to_string(),
    };
    vec![
        referral("REF-0012", "Alex Rivera", ReferralStatus::Qualified, dec!(50), "Dec 14"),
        referral("REF-0015", "Jamie Lee", ReferralStatus::Install, dec!(250), "Dec 16"),
        referral("REF-0018", "Pat Gomez", ReferralStatus::Submitted, dec!(0), "Dec 10"),
    ]
}

pub fn seed_dataset() -> EarningsDataset {
    EarningsDataset {
        deals: seed_deals(),
        timeline: vec![
            event("Dec 10", "Closed", "Contract signed"),
            event("Dec 16", "Blocked", "Permit docs missing"),
        ],
        payout_periods: vec![
            PayoutPeriod {
                period: "Nov 25–Dec 01".to_string(),
                total: dec!(980),
                status: PayoutStatus::Paid,
            },
            PayoutPeriod {
                period: "Dec 02–Dec 08".to_string(),
                total: dec!(650),
                status: PayoutStatus::Pending,
            },
        ],
        referrals: seed_referrals(),
        monthly_trend: vec![MonthlyTrendPoint {
            month: "Dec".to_string(),
            pending: dec!(1700),
            locked: dec!(2300),
            paid: dec!(2900),
        }],
        leaderboard: vec![
            LeaderboardRow { name: "Maria S.".to_string(), conversions: 6, earnings: dec!(750) },
            LeaderboardRow { name: "John M.".to_string(), conversions: 5, earnings: dec!(650) },
        ],
        advances: AdvanceLedger {
            balance: dec!(1250),
            next_deduction: dec!(150),
            ytd_issued: dec!(4000),
            history: vec![
                AdvanceEntry {
                    at: "Dec 05".to_string(),
                    description: "Advance issued".to_string(),
                    amount: dec!(500),
                },
                AdvanceEntry {
                    at: "Dec 08".to_string(),
                    description: "Deduction".to_string(),
                    amount: dec!(-150),
                },
            ],
        },
        approvals: vec![
            ApprovalKind::AdjustmentPending,
            ApprovalKind::ChargebackReview,
            ApprovalKind::PlanVersionChange,
        ],
        referral_payouts: vec![
            ReferralPayout { at: "Dec 01".to_string(), amount: dec!(250), status: PayoutStatus::Paid },
            ReferralPayout {
                at: "Dec 15".to_string(),
                amount: dec!(50),
                status: PayoutStatus::Pending,
            },
        ],
    }
}

fn event(at: &str, title: &str, detail: &str) -> TimelineEvent {
    TimelineEvent { at: at.to_string(), title: title.to_string(), detail: detail.to_string() }
}
