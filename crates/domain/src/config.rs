//! Configuration management

use serde::{Deserialize, Serialize};

use crate::types::{Brand, Role};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fixtures: FixturesConfig,
    #[serde(default)]
    pub session: SessionDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where sample data comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixturesConfig {
    /// JSON fixture file; the embedded seed data is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Starting point for a fresh session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub brand: Brand,
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}
