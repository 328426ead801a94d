//! Integration tests for the dashboard commands

mod support;

use novaearn_core::dashboard::panels::Panel;
use novaearn_core::{Action, SessionState};
use novaearn_domain::{Brand, Config, Role, SessionDefaults, View};
use novaearn_lib::{dispatch, get_menu, render_view, replay, start_session};
use rust_decimal_macros::dec;
use support::{seeded_context, seeded_context_with};

#[test]
fn start_session_uses_configured_defaults() {
    let config = Config {
        session: SessionDefaults { role: Role::Partner, brand: Brand::Roofing },
        ..Config::default()
    };
    let ctx = seeded_context_with(config);

    let state = start_session(&ctx).unwrap();
    assert_eq!(state.role(), Role::Partner);
    assert_eq!(state.brand(), Brand::Roofing);
    assert_eq!(state.view(), View::Home);
    assert_eq!(state.selected_deal_id(), Some("OPP-10428"));
}

#[test]
fn render_view_for_fresh_session_is_solar_dashboard() {
    let ctx = seeded_context();
    let state = start_session(&ctx).unwrap();
    let rendered = render_view(&ctx, &state).unwrap();

    assert_eq!(rendered.role_label, "Closer");
    assert_eq!(rendered.brand_label, "Nova NRG Solar");
    let Panel::Dashboard(panel) = rendered.panel else {
        panic!("expected dashboard panel");
    };
    assert_eq!(panel.totals.pending, dec!(650));
    assert_eq!(panel.totals.locked, dec!(950));
    assert_eq!(panel.monthly_trend.len(), 5);
    assert_eq!(panel.timeline.len(), 4);
}

#[test]
fn dispatch_returns_next_state_and_view() {
    let ctx = seeded_context();
    let state = start_session(&ctx).unwrap();

    let transition = dispatch(&ctx, &state, &Action::SelectView(View::Advances)).unwrap();
    assert_eq!(transition.state.view(), View::Advances);
    assert!(matches!(transition.view.panel, Panel::Advances(_)));

    let transition =
        dispatch(&ctx, &transition.state, &Action::SelectRole(Role::Customer)).unwrap();
    assert_eq!(transition.state.view(), View::Home);
    assert!(matches!(transition.view.panel, Panel::Home(_)));
}

#[test]
fn replay_renders_every_step() {
    let ctx = seeded_context();
    let actions: Vec<Action> = serde_json::from_str(
        r#"[
            {"type": "select_brand", "value": "roofing"},
            {"type": "select_view", "value": "pipeline"},
            {"type": "select_role", "value": "partner"},
            {"type": "select_view", "value": "leaderboard"}
        ]"#,
    )
    .unwrap();

    let steps = replay(&ctx, &actions).unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0].state.view(), View::Dashboard);

    let Panel::Pipeline(pipeline) = &steps[2].view.panel else {
        panic!("expected pipeline panel");
    };
    assert_eq!(pipeline.active_deal.as_ref().map(|deal| deal.id.as_str()), Some("OPP-11011"));

    assert_eq!(steps[3].state.view(), View::Home);
    let Panel::Leaderboard(board) = &steps[4].view.panel else {
        panic!("expected leaderboard panel");
    };
    let ranks: Vec<usize> = board.rows.iter().map(|row| row.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn rendered_view_serializes_with_panel_tag() {
    let ctx = seeded_context();
    let state = SessionState::new(Role::Admin, Brand::Solar, None);
    let state = novaearn_core::reduce(&state, &Action::SelectView(View::Approvals));

    let json = serde_json::to_value(render_view(&ctx, &state).unwrap()).unwrap();
    assert_eq!(json["panel"]["panel"], "approvals");
    assert_eq!(json["view"], "approvals");
    assert_eq!(json["menu"][2]["label"], "Payout Schedule");
    assert_eq!(json["panel"]["queue"][1]["tone"], "bad");
}

#[test]
fn pipeline_amounts_serialize_as_strings() {
    let ctx = seeded_context();
    let state = novaearn_core::reduce(
        &start_session(&ctx).unwrap(),
        &Action::SelectView(View::Pipeline),
    );

    let json = serde_json::to_value(render_view(&ctx, &state).unwrap()).unwrap();
    assert_eq!(json["panel"]["average_kilowatts"]["kind"], "mean");
    assert_eq!(json["panel"]["average_kilowatts_label"], "11.1");
    assert_eq!(json["panel"]["active_deal"]["pending"], "650");
}

#[test]
fn customer_menu_snapshot() {
    insta::assert_json_snapshot!(get_menu(Role::Customer), @r###"
    [
      {
        "view": "home",
        "label": "Home"
      },
      {
        "view": "referrals",
        "label": "My Referrals"
      },
      {
        "view": "leaderboard",
        "label": "Leaderboard"
      },
      {
        "view": "payouts",
        "label": "Payouts"
      },
      {
        "view": "settings",
        "label": "Settings"
      }
    ]
    "###);
}
