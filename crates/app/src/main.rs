//! Nova Earnings - command-line entry point
//!
//! Prints rendered views as JSON on stdout. Logs go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::fs;

use anyhow::Context;
use clap::Parser;
use novaearn_core::Action;
use novaearn_domain::LoggingConfig;
use novaearn_lib::cli::{Cli, Command};
use novaearn_lib::AppContext;
use serde::Serialize;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("novaearn: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file before reading config
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let ctx = build_context(&cli)?;
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    match cli.command {
        Command::Render(args) => {
            let mut state = novaearn_lib::start_session(&ctx)?;
            for action in args.actions() {
                state = novaearn_lib::dispatch(&ctx, &state, &action)?.state;
            }
            print_json(&novaearn_lib::render_view(&ctx, &state)?)
        }
        Command::Menu { role } => print_json(&novaearn_lib::get_menu(role)),
        Command::Replay { script } => {
            let contents = fs::read_to_string(&script)
                .with_context(|| format!("Failed to read {}", script.display()))?;
            let actions: Vec<Action> = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid action script {}", script.display()))?;
            print_json(&novaearn_lib::replay(&ctx, &actions)?)
        }
    }
}

fn build_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let config = match &cli.config {
        Some(path) => novaearn_infra::config::load_from(Some(path.clone())),
        None => novaearn_infra::config::load(),
    };

    // Default logging when the config itself is broken
    let logging =
        config.as_ref().map(|c| c.logging.clone()).unwrap_or_else(|_| LoggingConfig::default());
    novaearn_infra::init_tracing(&logging)?;

    let config = config.context("Failed to load configuration")?;
    AppContext::new_with_config(config).context("Failed to initialise application context")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{json}");
    Ok(())
}
