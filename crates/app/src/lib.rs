//! # Nova Earnings App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (frontend → backend bridge)
//! - Application context (dependency injection)
//! - Command-line parsing for the `novaearn` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
