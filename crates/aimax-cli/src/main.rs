//! AI MAX installer CLI
//!
//! The command-line interface for installing packaged Claude Code resources.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let ctx = Context::from_env();

    match cli.command {
        Some(Commands::Install { yes, force }) => commands::run_install(&ctx, yes, force),
        Some(Commands::Update { yes }) => commands::run_update(&ctx, yes),
        Some(Commands::Uninstall { yes }) => commands::run_uninstall(&ctx, yes),
        Some(Commands::List) => commands::run_list(ctx.installer.registry()),
        Some(Commands::Status { json }) => commands::run_status(&ctx, json),
        None => interactive::run_interactive(&ctx),
    }
}
