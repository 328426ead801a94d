//! Role-aware menus and view routing
//!
//! Internal staff and the external portal have disjoint menus apart from
//! `payouts` and `settings`, which both classes share but render
//! differently. [`route`] resolves a (role, view) pair to the panel that
//! renders it and never fails.

use novaearn_domain::{Role, RoleClass, View};
use serde::Serialize;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Entry in a role's navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MenuItem {
    pub view: View,
    pub label: &'static str,
}

const fn item(view: View, label: &'static str) -> MenuItem {
    MenuItem { view, label }
}

static INTERNAL_MENU: [MenuItem; 6] = [
    item(View::Dashboard, "Dashboard"),
    item(View::Pipeline, "Pipeline"),
    item(View::Payouts, "Payout Schedule"),
    item(View::Advances, "Advances"),
    item(View::Approvals, "Approvals"),
    item(View::Settings, "Settings"),
];

static EXTERNAL_MENU: [MenuItem; 5] = [
    item(View::Home, "Home"),
    item(View::Referrals, "My Referrals"),
    item(View::Leaderboard, "Leaderboard"),
    item(View::Payouts, "Payouts"),
    item(View::Settings, "Settings"),
];

/// Ordered menu for `role`.
pub fn menu(role: Role) -> &'static [MenuItem] {
    match role.class() {
        RoleClass::Internal => &INTERNAL_MENU,
        RoleClass::External => &EXTERNAL_MENU,
    }
}

/// Landing view for a role class.
pub const fn default_view(class: RoleClass) -> View {
    match class {
        RoleClass::Internal => View::Dashboard,
        RoleClass::External => View::Home,
    }
}

/// Whether `view` is on `role`'s menu.
pub fn is_permitted(role: Role, view: View) -> bool {
    menu(role).iter().any(|entry| entry.view == view)
}

/// Panel selected by a (role class, view) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Pipeline,
    PayoutSchedule,
    Advances,
    Approvals,
    Settings,
    Home,
    Referrals,
    Leaderboard,
    ReferralPayouts,
}

/// Resolve the panel for `view` as seen by `role`.
///
/// A view outside the role's menu renders the class default instead.
pub fn route(role: Role, view: View) -> Route {
    let class = role.class();
    let view = if is_permitted(role, view) { view } else { default_view(class) };

    match (class, view) {
        (RoleClass::Internal, View::Dashboard) => Route::Dashboard,
        (RoleClass::Internal, View::Pipeline) => Route::Pipeline,
        (RoleClass::Internal, View::Payouts) => Route::PayoutSchedule,
        (RoleClass::Internal, View::Advances) => Route::Advances,
        (RoleClass::Internal, View::Approvals) => Route::Approvals,
        (RoleClass::External, View::Home) => Route::Home,
        (RoleClass::External, View::Referrals) => Route::Referrals,
        (RoleClass::External, View::Leaderboard) => Route::Leaderboard,
        (RoleClass::External, View::Payouts) => Route::ReferralPayouts,
        (_, View::Settings) => Route::Settings,
        (RoleClass::Internal, _) => Route::Dashboard,
        (RoleClass::External, _) => Route::Home,
    }
}
