//! Observability infrastructure for structured logging
//!
//! Log output goes to stderr so that stdout stays reserved for rendered
//! JSON.

pub mod logging;

pub use logging::{build_filter, init_tracing};
