//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use novaearn_core::{DashboardService, EarningsRepository};
use novaearn_domain::{Config, Result};
use novaearn_infra::{config, FixtureStore};
use tracing::info;

/// Application context - holds the configuration and wired services
pub struct AppContext {
    pub config: Config,
    pub repository: Arc<dyn EarningsRepository>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Create a context from the probed configuration and environment.
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a context from an explicit config file plus the environment.
    pub fn from_config_file(path: PathBuf) -> Result<Self> {
        Self::new_with_config(config::load_from(Some(path))?)
    }

    /// Create a context with the fixture store the configuration selects.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store = FixtureStore::from_config(&config.fixtures)?;
        info!(
            deals = store.dataset().deals.len(),
            referrals = store.dataset().referrals.len(),
            custom_fixtures = config.fixtures.path.is_some(),
            "Fixture store ready"
        );
        Ok(Self::with_repository(config, Arc::new(store)))
    }

    /// Wire a context around any repository implementation.
    pub fn with_repository(config: Config, repository: Arc<dyn EarningsRepository>) -> Self {
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&repository)));
        Self { config, repository, dashboard }
    }
}
