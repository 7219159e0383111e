//! Interactive mode
//!
//! Entered when aimax is run without a subcommand. Uses dialoguer for
//! terminal-based action and component selection.

use aimax_core::InstallOptions;
use colored::Colorize;
use dialoguer::{Confirm, MultiSelect, Select};

use crate::commands::install::{install_selection, print_report};
use crate::commands::run_status;
use crate::context::Context;
use crate::error::{CliError, Result};

const ACTIONS: &[&str] = &[
    "Install components",
    "Uninstall components",
    "Show status",
    "Quit",
];

/// Run the interactive selection flow.
pub fn run_interactive(ctx: &Context) -> Result<()> {
    println!();
    println!("{}", "AI MAX".green().bold());
    println!("Packaged agents, rules, commands and skills for Claude Code.");
    println!();

    let action = Select::new()
        .with_prompt("What would you like to do?")
        .items(ACTIONS)
        .default(0)
        .interact()?;

    match action {
        0 => interactive_install(ctx),
        1 => interactive_uninstall(ctx),
        2 => run_status(ctx, false),
        _ => Ok(()),
    }
}

fn interactive_install(ctx: &Context) -> Result<()> {
    let keys = select_components(ctx, true)?;
    if keys.is_empty() {
        println!("{}", "Nothing selected.".yellow());
        return Ok(());
    }

    let force = !Confirm::new()
        .with_prompt("Back up existing files before overwriting?")
        .default(true)
        .interact()?;

    let proceed = Confirm::new()
        .with_prompt(format!(
            "Install {} component(s) into {}?",
            keys.len(),
            ctx.installer.dest_root().display()
        ))
        .default(true)
        .interact()?;
    if !proceed {
        return Err(CliError::user("Install cancelled."));
    }

    let options = InstallOptions {
        backup: true,
        force,
    };
    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let report = install_selection(&ctx.installer, &key_refs, options)?;
    print_report(&ctx.installer, &report);
    Ok(())
}

fn interactive_uninstall(ctx: &Context) -> Result<()> {
    let keys = select_components(ctx, false)?;
    if keys.is_empty() {
        println!("{}", "Nothing selected.".yellow());
        return Ok(());
    }

    let proceed = Confirm::new()
        .with_prompt(format!("Remove {} component(s)?", keys.len()))
        .default(false)
        .interact()?;
    if !proceed {
        return Err(CliError::user("Uninstall cancelled."));
    }

    let removed = ctx.installer.uninstall(&keys)?;
    println!("{}", "Uninstall complete!".green().bold());
    println!("  {}: {}", "Removed".dimmed(), removed.len());
    Ok(())
}

/// Multi-select over the registry. `checked` controls the initial state of
/// every item.
fn select_components(ctx: &Context, checked: bool) -> Result<Vec<String>> {
    let items: Vec<String> = ctx
        .installer
        .registry()
        .iter()
        .map(|c| format!("{} ({})", c.name, c.description))
        .collect();
    let defaults = vec![checked; items.len()];

    let indices = MultiSelect::new()
        .with_prompt("Select components (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    let keys = ctx.installer.registry().keys();
    Ok(indices.iter().map(|&i| keys[i].to_string()).collect())
}
