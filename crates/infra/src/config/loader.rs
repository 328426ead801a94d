//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from an explicit config file, a probed config file, or defaults
//! 2. Overlay any `NOVAEARN_*` environment variables that are set
//! 3. Supports JSON and TOML formats (detected by extension)
//!
//! ## Environment Variables
//! - `NOVAEARN_FIXTURES_PATH`: JSON fixture file replacing the embedded data
//! - `NOVAEARN_DEFAULT_ROLE`: Role a fresh session starts with
//! - `NOVAEARN_DEFAULT_BRAND`: Brand a fresh session starts with
//! - `NOVAEARN_LOG_LEVEL`: Filter directive used when `RUST_LOG` is unset
//! - `NOVAEARN_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./novaearn.toml`, `./novaearn.json` (current working directory)
//! 2. `./config.toml`, `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use novaearn_domain::{Brand, Config, NovaEarnError, Result, Role};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["novaearn.toml", "novaearn.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Uses the first probed config file when one exists and defaults
/// otherwise, then applies environment overrides.
///
/// # Errors
/// Returns `NovaEarnError::Config` if a file or variable is present but
/// invalid.
pub fn load() -> Result<Config> {
    load_from(None)
}

/// Load configuration from `path` (or a probed file) plus the environment.
///
/// # Errors
/// Returns `NovaEarnError::Config` if the explicit file is missing, or any
/// source holds an invalid value.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let base = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(base)
}

/// Load configuration from environment variables over defaults
///
/// Unset variables keep their default values.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `NovaEarnError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(path) = env_var("NOVAEARN_FIXTURES_PATH") {
        config.fixtures.path = Some(path);
    }
    if let Some(role) = env_var("NOVAEARN_DEFAULT_ROLE") {
        config.session.role = role
            .parse::<Role>()
            .map_err(|e| NovaEarnError::Config(format!("NOVAEARN_DEFAULT_ROLE: {}", e)))?;
    }
    if let Some(brand) = env_var("NOVAEARN_DEFAULT_BRAND") {
        config.session.brand = brand
            .parse::<Brand>()
            .map_err(|e| NovaEarnError::Config(format!("NOVAEARN_DEFAULT_BRAND: {}", e)))?;
    }
    if let Some(level) = env_var("NOVAEARN_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("NOVAEARN_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `NovaEarnError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NovaEarnError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NovaEarnError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NovaEarnError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| NovaEarnError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NovaEarnError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(NovaEarnError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory first, then the directory that
/// holds the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Read an environment variable, treating empty values as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
