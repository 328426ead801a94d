use std::time::Duration;

use novaearn_domain::NovaEarnError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"dashboard::render_view"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - The failure, if the command did not complete.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&NovaEarnError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Convert a `NovaEarnError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &NovaEarnError) -> &'static str {
    match error {
        NovaEarnError::Config(_) => "config",
        NovaEarnError::Fixture(_) => "fixture",
        NovaEarnError::InvalidInput(_) => "invalid_input",
        NovaEarnError::NotFound(_) => "not_found",
        NovaEarnError::Io(_) => "io",
        NovaEarnError::Internal(_) => "internal",
    }
}
