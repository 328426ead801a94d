//! # Nova Earnings Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The fixture store backing the earnings repository port
//! - Fixture validation
//! - Configuration loading (environment and files)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `novaearn-core`
//! - Contains all "impure" code (file I/O, process-wide logging)

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use fixtures::{validate_dataset, FixtureStore};
pub use observability::init_tracing;
