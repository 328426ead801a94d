//! Fixture-backed implementation of the earnings repository port

pub mod store;
pub mod validate;

pub use store::FixtureStore;
pub use validate::validate_dataset;
