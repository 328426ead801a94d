//! Session state, the reducer that evolves it, and the role-aware router

pub mod router;
pub mod state;
