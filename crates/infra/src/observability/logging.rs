//! Tracing subscriber setup

use novaearn_domain::{LoggingConfig, NovaEarnError, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter from `RUST_LOG`, falling back to `level`.
///
/// # Errors
/// Returns `NovaEarnError::Config` when `RUST_LOG` is unusable and `level`
/// is not a valid filter directive.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level)
            .map_err(|e| NovaEarnError::Config(format!("Invalid log level '{}': {}", level, e)))
    })
}

/// Install the global subscriber, writing to stderr.
///
/// A second call is a no-op: the first subscriber stays installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr).with_target(true)).try_init()
    };

    match installed {
        Ok(()) => {
            tracing::debug!(level = %config.level, json = config.json, "Tracing initialized");
        }
        Err(e) => {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
        }
    }
    Ok(())
}
