//! List command implementation
//!
//! Prints the static component registry. No filesystem access.

use aimax_core::ComponentRegistry;
use colored::Colorize;

use crate::error::Result;

pub fn run_list(registry: &ComponentRegistry) -> Result<()> {
    println!("{}", "Available Components".bold());
    println!();

    for component in registry.iter() {
        let kind = if component.recursive {
            "recursive"
        } else {
            "flat"
        };
        println!(
            "  {:<12} {} ({})",
            component.key.green(),
            component.description,
            kind.dimmed()
        );
    }

    println!();
    println!(
        "{} {} components available. Run {} to install them.",
        "Total:".dimmed(),
        registry.len(),
        "aimax install".cyan()
    );

    Ok(())
}
