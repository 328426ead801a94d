//! Shared test helpers for `novaearn-core` integration tests.
//!
//! These helpers provide a seeded data set and an in-memory repository so
//! that scenario tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
