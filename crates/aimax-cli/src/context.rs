//! Shared command context
//!
//! Resolves the source and destination roots once and hands every command
//! the same configured [`Installer`].

use aimax_core::paths::{default_claude_dir, default_source_dir};
use aimax_core::{ComponentRegistry, Installer};

/// Everything a command needs to run.
pub struct Context {
    pub installer: Installer,
}

impl Context {
    /// Build a context from the environment (`AIMAX_SOURCE_DIR`,
    /// `AIMAX_CLAUDE_DIR` overrides included).
    pub fn from_env() -> Self {
        let registry = ComponentRegistry::with_builtins();
        let installer = Installer::new(registry, default_source_dir(), default_claude_dir());
        Self { installer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_builds_with_all_builtin_components() {
        let ctx = Context::from_env();
        assert_eq!(ctx.installer.registry().len(), 4);
    }
}
