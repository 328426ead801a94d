//! # Nova Earnings Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the fixture data source
//! - Brand scoping, aggregation and progress derivations
//! - The navigation reducer and view router
//! - The dashboard service that composes panel view models
//!
//! ## Architecture Principles
//! - Only depends on `novaearn-domain`
//! - No file, network or platform code
//! - All data access via traits
//! - Pure, testable business logic

pub mod dashboard;
pub mod earnings;
pub mod navigation;

// Re-export specific items to avoid ambiguity
pub use dashboard::panels::{Panel, RenderedView, Tone};
pub use dashboard::DashboardService;
pub use earnings::aggregator::{aggregate, DealAggregate, KilowattAverage, StageCount};
pub use earnings::ports::EarningsRepository;
pub use earnings::referrals::{is_step_done, progress, summarize, ReferralStep, ReferralSummary};
pub use earnings::selector::{active_deal, scope_deals};
pub use earnings::stepper::{stage_steps, StageStep, StepState};
pub use navigation::router::{default_view, is_permitted, menu, route, MenuItem, Route};
pub use navigation::state::{reduce, Action, SessionState};
