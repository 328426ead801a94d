//! Earnings figures derived from deal and referral fixtures

pub mod aggregator;
pub mod ports;
pub mod referrals;
pub mod selector;
pub mod stepper;
