//! Immutable in-memory store for the sample earnings data

use std::path::Path;
use std::sync::Arc;

use novaearn_core::EarningsRepository;
use novaearn_domain::{
    AdvanceLedger, ApprovalKind, Deal, EarningsDataset, FixturesConfig, LeaderboardRow,
    MonthlyTrendPoint, NovaEarnError, PayoutPeriod, Referral, ReferralPayout, Result,
    TimelineEvent,
};
use tracing::info;

use super::validate::validate_dataset;
use crate::errors::InfraError;

/// Seed data compiled into the binary.
const EMBEDDED_SEED: &str = include_str!("../../fixtures/seed.json");

/// Fixture-backed `EarningsRepository`
///
/// Built once at startup and never mutated. Clones share the same data.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dataset: Arc<EarningsDataset>,
}

impl FixtureStore {
    /// Store over the embedded seed data.
    ///
    /// # Errors
    /// Returns `NovaEarnError::Fixture` if the embedded data fails to parse
    /// or validate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Store over a JSON fixture file on disk.
    ///
    /// # Errors
    /// Returns `NovaEarnError::NotFound`/`Io` when the file cannot be read
    /// and `NovaEarnError::Fixture` when its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
        let store = Self::from_json(&contents)?;
        info!(path = %path.display(), deals = store.dataset.deals.len(), "Loaded fixture file");
        Ok(store)
    }

    /// Store chosen by configuration: the configured file, else the
    /// embedded seed.
    pub fn from_config(config: &FixturesConfig) -> Result<Self> {
        match config.path.as_deref() {
            Some(path) => Self::from_path(Path::new(path)),
            None => Self::embedded(),
        }
    }

    /// Parse and validate a JSON data set.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: EarningsDataset = serde_json::from_str(json).map_err(InfraError::from)?;
        Self::from_dataset(dataset)
    }

    pub fn from_dataset(dataset: EarningsDataset) -> Result<Self> {
        validate_dataset(&dataset)?;
        Ok(Self { dataset: Arc::new(dataset) })
    }

    pub fn dataset(&self) -> &EarningsDataset {
        &self.dataset
    }

    /// Identifier of the first deal.
    ///
    /// # Errors
    /// Returns `NovaEarnError::NotFound` when the data set has no deals.
    pub fn first_deal_id(&self) -> Result<&str> {
        self.dataset
            .first_deal_id()
            .ok_or_else(|| NovaEarnError::NotFound("fixture data set has no deals".to_string()))
    }
}

impl EarningsRepository for FixtureStore {
    fn deals(&self) -> Result<Vec<Deal>> {
        Ok(self.dataset.deals.clone())
    }

    fn timeline(&self) -> Result<Vec<TimelineEvent>> {
        Ok(self.dataset.timeline.clone())
    }

    fn payout_periods(&self) -> Result<Vec<PayoutPeriod>> {
        Ok(self.dataset.payout_periods.clone())
    }

    fn referrals(&self) -> Result<Vec<Referral>> {
        Ok(self.dataset.referrals.clone())
    }

    fn monthly_trend(&self) -> Result<Vec<MonthlyTrendPoint>> {
        Ok(self.dataset.monthly_trend.clone())
    }

    fn leaderboard(&self) -> Result<Vec<LeaderboardRow>> {
        Ok(self.dataset.leaderboard.clone())
    }

    fn advance_ledger(&self) -> Result<AdvanceLedger> {
        Ok(self.dataset.advances.clone())
    }

    fn approvals(&self) -> Result<Vec<ApprovalKind>> {
        Ok(self.dataset.approvals.clone())
    }

    fn referral_payouts(&self) -> Result<Vec<ReferralPayout>> {
        Ok(self.dataset.referral_payouts.clone())
    }
}
