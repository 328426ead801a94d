//! Commands - frontend to backend bridge

mod dashboard;

pub use dashboard::*;
