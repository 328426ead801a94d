//! Dashboard composition: routes a session to a panel and fills it

pub mod panels;
pub mod service;

pub use service::DashboardService;
