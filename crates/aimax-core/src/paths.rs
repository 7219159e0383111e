//! Destination and source root resolution
//!
//! Both roots honour an environment override so tests and scripted installs
//! can redirect them away from the real home directory.

use std::env;
use std::path::PathBuf;

/// Environment override for the destination configuration root.
pub const CLAUDE_DIR_ENV: &str = "AIMAX_CLAUDE_DIR";

/// Environment override for the packaged source root.
pub const SOURCE_DIR_ENV: &str = "AIMAX_SOURCE_DIR";

/// Resolve the destination configuration root.
///
/// `$AIMAX_CLAUDE_DIR` when set, otherwise `~/.claude`. Falls back to
/// `.claude` relative to the working directory when no home directory can be
/// determined (containers, stripped-down CI environments).
pub fn default_claude_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CLAUDE_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".claude"))
        .unwrap_or_else(|| PathBuf::from(".claude"))
}

/// Resolve the packaged source root.
///
/// `$AIMAX_SOURCE_DIR` when set, otherwise the `assets/` directory next to
/// the running executable.
pub fn default_source_dir() -> PathBuf {
    if let Some(dir) = env::var_os(SOURCE_DIR_ENV) {
        return PathBuf::from(dir);
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("assets")))
        .unwrap_or_else(|| PathBuf::from("assets"))
}
