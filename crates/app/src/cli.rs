//! Command-line arguments for the `novaearn` binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use novaearn_core::Action;
use novaearn_domain::{Brand, Role, View};

#[derive(Parser, Debug)]
#[command(name = "novaearn")]
#[command(about = "Commission and referral dashboard, rendered as JSON")]
#[command(version)]
#[command(arg_required_else_help = true)]
/// Command-line arguments.
pub struct Cli {
    /// Config file (probes novaearn.toml/config.toml when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the rendered view for a session
    Render(RenderArgs),
    /// Print a role's navigation menu
    Menu {
        /// Role whose menu to print
        #[arg(long)]
        role: Role,
    },
    /// Apply a JSON array of actions and print every rendered step
    Replay {
        /// Action script, e.g. `[{"type": "select_view", "value": "pipeline"}]`
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

/// Options for `novaearn render`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderArgs {
    /// Role to view as (setter, closer, manager, ops, admin, customer, partner)
    #[arg(long)]
    pub role: Option<Role>,
    /// Line of business (solar, roofing)
    #[arg(long)]
    pub brand: Option<Brand>,
    /// Menu entry to open
    #[arg(long)]
    pub view: Option<View>,
    /// Deal to select, e.g. OPP-10428
    #[arg(long)]
    pub deal: Option<String>,
}

impl RenderArgs {
    /// Actions that take a fresh session to the requested one.
    ///
    /// Role comes first so the view is checked against the requested
    /// role's menu.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(role) = self.role {
            actions.push(Action::SelectRole(role));
        }
        if let Some(brand) = self.brand {
            actions.push(Action::SelectBrand(brand));
        }
        if let Some(deal) = &self.deal {
            actions.push(Action::SelectDeal(deal.clone()));
        }
        if let Some(view) = self.view {
            actions.push(Action::SelectView(view));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("novaearn").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_flags_parse_case_insensitively() {
        let cli = parse(&[
            "render", "--role", "Admin", "--brand", "ROOFING", "--view", "approvals", "--deal",
            "OPP-11011",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.role, Some(Role::Admin));
        assert_eq!(args.brand, Some(Brand::Roofing));
        assert_eq!(args.view, Some(View::Approvals));
        assert_eq!(args.deal.as_deref(), Some("OPP-11011"));
    }

    #[test]
    fn render_without_flags_keeps_defaults() {
        let cli = parse(&["render"]).unwrap();
        assert_eq!(cli.command, Command::Render(RenderArgs::default()));
    }

    #[test]
    fn render_actions_select_role_before_view() {
        let args = RenderArgs {
            role: Some(Role::Partner),
            view: Some(View::Leaderboard),
            ..RenderArgs::default()
        };
        assert_eq!(
            args.actions(),
            vec![Action::SelectRole(Role::Partner), Action::SelectView(View::Leaderboard)]
        );
    }

    #[test]
    fn config_flag_is_global() {
        let before = parse(&["--config", "novaearn.toml", "menu", "--role", "customer"]).unwrap();
        assert_eq!(before.config, Some(PathBuf::from("novaearn.toml")));
        assert_eq!(before.command, Command::Menu { role: Role::Customer });

        let after = parse(&["menu", "--role", "customer", "--config", "novaearn.toml"]).unwrap();
        assert_eq!(after.config, Some(PathBuf::from("novaearn.toml")));
    }

    #[test]
    fn replay_takes_one_script() {
        let cli = parse(&["replay", "script.json"]).unwrap();
        assert_eq!(cli.command, Command::Replay { script: PathBuf::from("script.json") });
        assert!(parse(&["replay"]).is_err());
        assert!(parse(&["replay", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn subcommand_help_is_displayed_not_rejected() {
        let err = parse(&["render", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let rendered = err.to_string();
        assert!(rendered.contains("--role"));
        assert!(rendered.contains("--deal"));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert_eq!(parse(&["deploy"]).unwrap_err().kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(
            parse(&["render", "--role", "owner"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["render", "--colour", "red"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse(&["render", "--role"]).is_err());
        assert!(parse(&["menu"]).is_err());
    }
}
