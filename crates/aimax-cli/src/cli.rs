//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// AI MAX - packaged agents, rules, commands and skills for Claude Code
#[derive(Parser, Debug)]
#[command(name = "aimax")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (interactive mode when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install all components into ~/.claude
    ///
    /// Existing files are backed up to <file>.backup before being
    /// overwritten unless --force is given.
    Install {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Overwrite existing files without taking backups
        #[arg(short, long)]
        force: bool,
    },

    /// Refresh the components recorded by a previous install
    Update {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove installed components and the version ledger
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the available components
    List,

    /// Show per-component installation status
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn install_flags_parse() {
        let cli = Cli::parse_from(["aimax", "install", "-y", "--force"]);
        assert_eq!(
            cli.command,
            Some(Commands::Install {
                yes: true,
                force: true
            })
        );
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["aimax"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn status_json_flag_parses() {
        let cli = Cli::parse_from(["aimax", "status", "--json"]);
        assert_eq!(cli.command, Some(Commands::Status { json: true }));
    }
}
