//! Version ledger
//!
//! The ledger records which installer version last ran and which component
//! keys it was asked to install. It is a single TOML file at a fixed path
//! inside the destination root, replaced wholesale on every install and
//! deleted on uninstall.

use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Well-known ledger file name inside the destination root.
pub const LEDGER_FILE: &str = ".aimax-version";

/// Persisted record of the last install.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionLedger {
    /// Installer version that last ran
    pub version: String,
    /// Component keys as passed by the caller, unknown keys included
    pub components: Vec<String>,
    /// When the ledger was last written
    pub updated: DateTime<Utc>,
}

impl VersionLedger {
    /// Create a ledger record stamped with the current time.
    pub fn new(version: impl Into<String>, components: Vec<String>) -> Self {
        Self {
            version: version.into(),
            components,
            updated: Utc::now(),
        }
    }

    /// Load the ledger from the destination root.
    ///
    /// Returns `Ok(None)` when no ledger file exists — an absent ledger means
    /// "no prior installation", not an error.
    pub fn load(dest_root: &Path) -> Result<Option<Self>> {
        let path = dest_root.join(LEDGER_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let ledger: VersionLedger = toml::from_str(&content)?;
        Ok(Some(ledger))
    }

    /// Save the ledger atomically with an exclusive lock.
    ///
    /// Uses write-to-temp-then-rename so a crash mid-write never leaves a
    /// truncated ledger behind.
    pub fn save(&self, dest_root: &Path) -> Result<()> {
        let path = dest_root.join(LEDGER_FILE);
        let content = toml::to_string_pretty(self)?;

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::io(&path, e))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(|e| Error::io(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| Error::io(&path, e))?;

        // Lock released when lock_file is dropped
        Ok(())
    }

    /// Remove the ledger file if present. Absence is not an error.
    pub fn remove(dest_root: &Path) -> Result<()> {
        let path = dest_root.join(LEDGER_FILE);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        }
        Ok(())
    }
}
