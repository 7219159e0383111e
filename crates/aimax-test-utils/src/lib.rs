//! Shared test utilities for the aimax workspace.
//!
//! Provides the [`TestEnv`] fixture: a temporary directory holding a
//! packaged source tree and a destination `.claude` directory, so tests
//! never touch the real home directory. Dev-dependency only — never
//! published.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary install environment with a source tree and a destination
/// configuration directory.
///
/// # Example
///
/// ```rust,no_run
/// use aimax_test_utils::TestEnv;
///
/// let env = TestEnv::new();
/// env.add_source_file("agents/test-agent.md", "# Test Agent");
/// assert!(env.source_root().join("agents/test-agent.md").exists());
/// ```
pub struct TestEnv {
    _temp_dir: TempDir,
    source_root: PathBuf,
    claude_dir: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Create an environment with an empty source tree and an empty
    /// destination directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestEnv: failed to create temp dir");
        let source_root = temp_dir.path().join("source");
        let claude_dir = temp_dir.path().join(".claude");
        fs::create_dir_all(&source_root).unwrap();
        fs::create_dir_all(&claude_dir).unwrap();
        Self {
            _temp_dir: temp_dir,
            source_root,
            claude_dir,
        }
    }

    /// The packaged source root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// The destination configuration root.
    pub fn claude_dir(&self) -> &Path {
        &self.claude_dir
    }

    /// Write a file (creating parent directories) under the source root.
    pub fn add_source_file(&self, relative: &str, content: &str) {
        write_file(&self.source_root.join(relative), content);
    }

    /// Write a file (creating parent directories) under the destination root.
    pub fn add_dest_file(&self, relative: &str, content: &str) {
        write_file(&self.claude_dir.join(relative), content);
    }

    /// Populate the source tree with one file per builtin component, enough
    /// for a full install in end-to-end tests.
    pub fn seed_all_components(&self) {
        self.add_source_file("agents/test-agent.md", "# Test Agent");
        self.add_source_file("rules/test-rule.md", "# Test Rule");
        self.add_source_file("commands/review.md", "/review");
        self.add_source_file("skills/review/SKILL.md", "# Review Skill");
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
