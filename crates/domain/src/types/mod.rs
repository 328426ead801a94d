//! Domain types and models

pub mod access;
pub mod dataset;
pub mod deal;
pub mod ledger;
pub mod referral;

// Re-export for convenience
pub use access::{Brand, Role, RoleClass, View};
pub use dataset::EarningsDataset;
pub use deal::{Deal, DealStatus, Stage};
pub use ledger::{
    AdvanceEntry, AdvanceLedger, ApprovalKind, MonthlyTrendPoint, PayoutPeriod, PayoutStatus,
    TimelineEvent,
};
pub use referral::{LeaderboardRow, Referral, ReferralPayout, ReferralStatus};
