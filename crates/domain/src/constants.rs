//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

/// Placeholder shown wherever a date or figure is absent.
pub const NO_VALUE_SENTINEL: &str = "—";

/// Number of leading stages charted in the dashboard stage mix.
pub const STAGE_MIX_PREFIX: usize = 7;
