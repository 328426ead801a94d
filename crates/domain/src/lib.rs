//! # Nova Earnings Domain
//!
//! Business domain types and models for Nova Earnings.
//!
//! This crate contains:
//! - Deal, referral, payout and ledger records
//! - Closed enums for brands, roles, views, stages and statuses
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Nova Earnings crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
