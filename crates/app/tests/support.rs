#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use novaearn_domain::Config;
use novaearn_infra::FixtureStore;
use novaearn_lib::context::AppContext;
use tempfile::TempDir;

const NOVAEARN_VARS: [&str; 5] = [
    "NOVAEARN_FIXTURES_PATH",
    "NOVAEARN_DEFAULT_ROLE",
    "NOVAEARN_DEFAULT_BRAND",
    "NOVAEARN_LOG_LEVEL",
    "NOVAEARN_LOG_JSON",
];

/// Context over the embedded seed data with default configuration.
pub fn seeded_context() -> AppContext {
    seeded_context_with(Config::default())
}

pub fn seeded_context_with(config: Config) -> AppContext {
    let store = FixtureStore::embedded().expect("embedded seed should load");
    AppContext::with_repository(config, Arc::new(store))
}

/// Remove every `NOVAEARN_*` variable so tests start from a clean slate.
pub fn clear_novaearn_env() {
    for key in NOVAEARN_VARS {
        std::env::remove_var(key);
    }
}

/// Write `contents` into a fresh temp directory and return both.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("temp file should be written");
    (dir, path)
}
