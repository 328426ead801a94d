//! Dashboard commands
//!
//! Each command wraps a core operation with timing and structured outcome
//! logging. Session state is owned by the caller and passed back in; the
//! backend keeps none between calls.

use std::time::Instant;

use novaearn_core::{menu, reduce, Action, MenuItem, RenderedView, SessionState};
use novaearn_domain::{Result as DomainResult, Role};
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// State after an action together with its rendered view
#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub state: SessionState,
    pub view: RenderedView,
}

fn run_command<T>(command: &str, body: impl FnOnce() -> DomainResult<T>) -> DomainResult<T> {
    let start = Instant::now();
    let result = body();
    log_command_execution(command, start.elapsed(), result.as_ref().err());
    result
}

// =============================================================================
// Command 1: start_session
// =============================================================================

/// Fresh session from the configured defaults.
pub fn start_session(ctx: &AppContext) -> DomainResult<SessionState> {
    run_command("dashboard::start_session", || {
        let state = ctx.dashboard.initial_state(&ctx.config.session)?;
        info!(
            role = %state.role(),
            brand = %state.brand(),
            deal = ?state.selected_deal_id(),
            "Session started"
        );
        Ok(state)
    })
}

// =============================================================================
// Command 2: render_view
// =============================================================================

/// Render the panel for `state`.
pub fn render_view(ctx: &AppContext, state: &SessionState) -> DomainResult<RenderedView> {
    run_command("dashboard::render_view", || ctx.dashboard.render(state))
}

// =============================================================================
// Command 3: get_menu
// =============================================================================

/// Navigation menu for `role`.
pub fn get_menu(role: Role) -> Vec<MenuItem> {
    let start = Instant::now();
    let items = menu(role).to_vec();
    log_command_execution("dashboard::get_menu", start.elapsed(), None);
    items
}

// =============================================================================
// Command 4: dispatch
// =============================================================================

/// Apply one action and render the resulting state.
pub fn dispatch(
    ctx: &AppContext,
    state: &SessionState,
    action: &Action,
) -> DomainResult<Transition> {
    run_command("dashboard::dispatch", || {
        let next = reduce(state, action);
        let view = ctx.dashboard.render(&next)?;
        Ok(Transition { state: next, view })
    })
}

// =============================================================================
// Command 5: replay
// =============================================================================

/// Apply `actions` in order to a fresh session, rendering after each one.
///
/// The first entry is the untouched starting view.
pub fn replay(ctx: &AppContext, actions: &[Action]) -> DomainResult<Vec<Transition>> {
    run_command("dashboard::replay", || {
        let mut state = ctx.dashboard.initial_state(&ctx.config.session)?;
        let mut transitions = Vec::with_capacity(actions.len() + 1);
        transitions.push(Transition { view: ctx.dashboard.render(&state)?, state: state.clone() });

        for action in actions {
            state = reduce(&state, action);
            transitions.push(Transition { view: ctx.dashboard.render(&state)?, state: state.clone() });
        }

        info!(actions = actions.len(), "Replay finished");
        Ok(transitions)
    })
}
