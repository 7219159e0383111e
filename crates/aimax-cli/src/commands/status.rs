//! Status command implementation

use aimax_core::{ComponentStatus, VersionLedger, check_status};
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

/// Run the status command. `json` emits machine-readable output.
pub fn run_status(ctx: &Context, json: bool) -> Result<()> {
    let status = check_status(ctx.installer.registry(), ctx.installer.dest_root());

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "AI MAX Status".bold());
    println!();
    println!(
        "{}:   {}",
        "Directory".dimmed(),
        ctx.installer.dest_root().display()
    );

    match VersionLedger::load(ctx.installer.dest_root())? {
        Some(ledger) => {
            println!("{}:   v{}", "Installed".dimmed(), ledger.version.cyan());
        }
        None => {
            println!("{}:   {}", "Installed".dimmed(), "no".yellow());
        }
    }
    println!();

    for entry in &status {
        print_component(entry);
    }

    Ok(())
}

fn print_component(entry: &ComponentStatus) {
    if entry.installed {
        println!(
            "  {} {:<10} {} file(s)  {}",
            "+".green(),
            entry.name.cyan(),
            entry.file_count,
            entry.path.display().to_string().dimmed()
        );
    } else {
        println!(
            "  {} {:<10} {}",
            "-".dimmed(),
            entry.name.dimmed(),
            "not installed".dimmed()
        );
    }
}
