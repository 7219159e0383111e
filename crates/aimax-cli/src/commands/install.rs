//! Install command implementation

use aimax_core::{InstallOptions, InstallReport, Installer};
use colored::Colorize;
use dialoguer::Confirm;

use crate::context::Context;
use crate::error::{CliError, Result};

/// Run the install command.
///
/// Installs every builtin component. `yes` skips the confirmation prompt;
/// `force` overwrites existing files without taking `.backup` copies.
pub fn run_install(ctx: &Context, yes: bool, force: bool) -> Result<()> {
    let keys = ctx.installer.registry().keys();

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Install {} components into {}?",
                keys.len(),
                ctx.installer.dest_root().display()
            ))
            .default(true)
            .interact()?;
        if !proceed {
            return Err(CliError::user("Install cancelled."));
        }
    }

    let options = InstallOptions {
        backup: true,
        force,
    };
    let report = install_selection(&ctx.installer, &keys, options)?;
    print_report(&ctx.installer, &report);
    Ok(())
}

/// Install a specific component selection. Shared with the interactive flow.
pub fn install_selection(
    installer: &Installer,
    keys: &[&str],
    options: InstallOptions,
) -> Result<InstallReport> {
    Ok(installer.install(keys, options)?)
}

/// Print the post-install summary.
pub fn print_report(installer: &Installer, report: &InstallReport) {
    println!("{}", "Install complete!".green().bold());
    println!();
    println!(
        "  {}: {}",
        "Directory".dimmed(),
        installer.dest_root().display()
    );
    println!("  {}: {}", "Files".dimmed(), report.installed.len());
    if !report.skipped.is_empty() {
        println!(
            "  {}: {}",
            "Skipped".yellow(),
            report.skipped.len()
        );
    }
    println!();
}
