//! Core layer for the AI MAX installer
//!
//! This crate implements everything below the CLI surface:
//!
//! - **Component registry**: the static catalogue of installable bundles
//!   (agents, rules, commands, skills)
//! - **Sync engine**: recursive and flat copy with backup-before-overwrite,
//!   plus uninstall
//! - **Version ledger**: the `.aimax-version` record of what was installed
//! - **Status inspector**: read-only per-component installation report
//!
//! # Architecture
//!
//! `aimax-core` sits below the CLI layer and owns all filesystem mutation:
//!
//! ```text
//!        aimax-cli
//!            |
//!       aimax-core
//!            |
//!   registry | sync | ledger | status
//! ```
//!
//! The destination root is the user's `~/.claude` directory; the source root
//! is the packaged asset tree shipped alongside the binary. Both are injected
//! into the [`Installer`] so tests can point them anywhere.

pub mod error;
pub mod installer;
pub mod ledger;
pub mod paths;
pub mod registry;
pub mod status;

pub use error::{Error, Result};
pub use installer::{InstallOptions, InstallReport, Installer};
pub use ledger::{LEDGER_FILE, VersionLedger};
pub use paths::default_claude_dir;
pub use registry::{Component, ComponentRegistry};
pub use status::{ComponentStatus, check_status};
