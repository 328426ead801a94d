//! Immutable session state and its reducer

use novaearn_domain::{Brand, Role, SessionDefaults, View};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use tracing::debug;

use super::router::{default_view, is_permitted};

/// What the user is currently looking at
///
/// Only [`SessionState::new`] and [`reduce`] produce values, so the view is
/// always inside the role's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SessionState {
    role: Role,
    brand: Brand,
    view: View,
    selected_deal_id: Option<String>,
}

impl SessionState {
    /// Fresh session on the role's landing view.
    pub fn new(role: Role, brand: Brand, selected_deal_id: Option<String>) -> Self {
        Self { role, brand, view: default_view(role.class()), selected_deal_id }
    }

    /// Fresh session for the configured default role and brand.
    pub fn from_defaults(defaults: &SessionDefaults, selected_deal_id: Option<String>) -> Self {
        Self::new(defaults.role, defaults.brand, selected_deal_id)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn brand(&self) -> Brand {
        self.brand
    }

    pub const fn view(&self) -> View {
        self.view
    }

    pub fn selected_deal_id(&self) -> Option<&str> {
        self.selected_deal_id.as_deref()
    }
}

/// User interaction applied to a [`SessionState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    SelectRole(Role),
    SelectBrand(Brand),
    SelectView(View),
    SelectDeal(String),
}

/// Produce the next state. Total: every action yields a valid state.
pub fn reduce(state: &SessionState, action: &Action) -> SessionState {
    match action {
        Action::SelectView(view) => {
            if is_permitted(state.role, *view) {
                SessionState { view: *view, ..state.clone() }
            } else {
                debug!(role = %state.role, view = %view, "Ignoring view outside role menu");
                state.clone()
            }
        }
        Action::SelectRole(role) => {
            let view = if is_permitted(*role, state.view) {
                state.view
            } else {
                debug!(role = %role, stale = %state.view, "Resetting view after role change");
                default_view(role.class())
            };
            SessionState { role: *role, view, ..state.clone() }
        }
        Action::SelectBrand(brand) => SessionState { brand: *brand, ..state.clone() },
        Action::SelectDeal(id) => {
            SessionState { selected_deal_id: Some(id.clone()), ..state.clone() }
        }
    }
}
