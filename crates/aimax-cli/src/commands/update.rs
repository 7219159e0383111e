//! Update command implementation
//!
//! Re-installs the components recorded by the previous run, refreshing every
//! file from the packaged source tree. Falls back to all components when no
//! ledger exists.

use aimax_core::{InstallOptions, VersionLedger};
use colored::Colorize;
use dialoguer::Confirm;
use semver::Version;

use crate::commands::install::{install_selection, print_report};
use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the update command.
///
/// The component selection comes from the ledger. A missing ledger and a
/// ledger with an empty component list both fall back to all components:
/// an empty list means a previous run installed nothing, and updating from
/// that state should produce a full installation rather than another no-op.
pub fn run_update(ctx: &Context, yes: bool) -> Result<()> {
    let ledger = VersionLedger::load(ctx.installer.dest_root())?;

    let keys: Vec<String> = match &ledger {
        Some(ledger) if !ledger.components.is_empty() => ledger.components.clone(),
        _ => ctx
            .installer
            .registry()
            .keys()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    let current = env!("CARGO_PKG_VERSION");
    match &ledger {
        Some(ledger) => match (
            Version::parse(&ledger.version),
            Version::parse(current),
        ) {
            (Ok(installed), Ok(running)) if installed == running => {
                println!(
                    "{} (v{current}), refreshing files.",
                    "Already up to date".green()
                );
            }
            _ => {
                println!(
                    "Updating {} {} {}",
                    format!("v{}", ledger.version).yellow(),
                    "->".dimmed(),
                    format!("v{current}").green()
                );
            }
        },
        None => {
            println!(
                "{} Installing v{current}.",
                "No previous installation found.".yellow()
            );
        }
    }

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Update {} components?", keys.len()))
            .default(true)
            .interact()?;
        if !proceed {
            return Err(CliError::user("Update cancelled."));
        }
    }

    let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
    let report = install_selection(&ctx.installer, &key_refs, InstallOptions::default())?;
    print_report(&ctx.installer, &report);
    Ok(())
}
