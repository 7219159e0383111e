//! Status inspector
//!
//! Read-only view of what is installed under the destination root. Never
//! fails: a missing or unreadable target just reports as not installed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::registry::ComponentRegistry;

/// Installation state of a single component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentStatus {
    /// Component key
    pub key: &'static str,
    /// Human-readable label
    pub name: &'static str,
    /// Whether the resolved target path exists
    pub installed: bool,
    /// Resolved target path
    pub path: PathBuf,
    /// Number of immediate entries under the target path (0 when missing)
    pub file_count: usize,
}

/// Report the installation state of every registry component.
pub fn check_status(registry: &ComponentRegistry, dest_root: &Path) -> Vec<ComponentStatus> {
    registry
        .iter()
        .map(|component| {
            let path = dest_root.join(component.target);
            let file_count = count_entries(&path);
            ComponentStatus {
                key: component.key,
                name: component.name,
                installed: path.exists(),
                path,
                file_count,
            }
        })
        .collect()
}

fn count_entries(path: &Path) -> usize {
    match fs::read_dir(path) {
        Ok(entries) => entries.filter(|e| e.is_ok()).count(),
        Err(_) => 0,
    }
}
