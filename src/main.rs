//! hwmgr - project membership and shared hardware checkout
//!
//! Usage: hwmgr [COMMAND]
//!
//! Commands:
//!   show         Show projects, hardware sets and availability
//!   apply        Apply a script of actions
//!   interactive  Join projects and move hardware from a menu

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hwmgr::config::{self, Config};
use hwmgr::presentation::{Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;
use ui::json::emit_event;
use ui::json::events::CompleteEvent;
use ui::output::print_config_warnings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_layered(Some(cwd.as_path()))?;

    init_tracing(cli.verbose, &loaded.config);
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "using config");
    }

    let config = loaded.config;
    let ui = UiContext::new(cli.json, cli.color, &config);
    print_config_warnings(&loaded.warnings, &ui);

    let dataset = cli.dataset.as_deref();
    let (command, result) = match cli.command {
        Some(Commands::Show { project }) => (
            "show",
            commands::show::cmd_show(project.as_deref(), dataset, &config, &ui),
        ),
        Some(Commands::Apply { script, strict }) => (
            "apply",
            commands::apply::cmd_apply(&script, strict, dataset, &config, &ui),
        ),
        Some(Commands::Interactive) => (
            "interactive",
            commands::interactive::cmd_interactive(dataset, &config, &ui),
        ),
        None if ui.can_prompt() => (
            "interactive",
            commands::interactive::cmd_interactive(dataset, &config, &ui),
        ),
        None => ("show", commands::show::cmd_show(None, dataset, &config, &ui)),
    };

    // Commands only emit `complete` on success; failures get theirs here.
    if result.is_err() && ui.json {
        let _ = emit_event(&CompleteEvent::failure(command));
    }
    result
}

/// Log to stderr. `RUST_LOG` wins, then `-v` flags, then the configured verbosity.
fn init_tracing(verbose: u8, config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, config)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn log_directive(verbose: u8, config: &Config) -> &'static str {
    match verbose {
        0 => config.output.verbosity.log_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
