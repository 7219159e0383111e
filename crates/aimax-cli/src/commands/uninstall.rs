//! Uninstall command implementation

use aimax_core::VersionLedger;
use colored::Colorize;
use dialoguer::Confirm;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the uninstall command.
///
/// Removes the components recorded in the ledger and deletes the ledger
/// itself. A missing ledger and a ledger with an empty component list both
/// fall back to all components, so uninstall always sweeps the full set
/// when there is no meaningful record of a narrower selection.
pub fn run_uninstall(ctx: &Context, yes: bool) -> Result<()> {
    let keys: Vec<String> = match VersionLedger::load(ctx.installer.dest_root())? {
        Some(ledger) if !ledger.components.is_empty() => ledger.components,
        _ => ctx
            .installer
            .registry()
            .keys()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Remove {} components from {}?",
                keys.len(),
                ctx.installer.dest_root().display()
            ))
            .default(false)
            .interact()?;
        if !proceed {
            return Err(CliError::user("Uninstall cancelled."));
        }
    }

    let removed = ctx.installer.uninstall(&keys)?;

    println!("{}", "Uninstall complete!".green().bold());
    println!("  {}: {}", "Removed".dimmed(), removed.len());
    println!();
    Ok(())
}
