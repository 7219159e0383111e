//! Filesystem sync engine
//!
//! Copies packaged component trees into the destination root, taking a
//! `.backup` sibling of any file it is about to overwrite, and removes them
//! again on uninstall. All operations are sequential and best-effort: the
//! first filesystem error aborts and propagates, and anything already
//! written or removed stays that way.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::registry::ComponentRegistry;
use crate::{Error, Result, VersionLedger};

/// Suffix filter applied to flat (non-recursive) components.
const MARKDOWN_EXT: &str = ".md";

/// Suffix appended to the pre-overwrite copy of an existing destination file.
const BACKUP_SUFFIX: &str = ".backup";

/// Options controlling overwrite behaviour during install.
#[derive(Debug, Clone, Copy)]
pub struct InstallOptions {
    /// Copy an existing destination file to `<file>.backup` before
    /// overwriting it. Only one backup generation is kept.
    pub backup: bool,
    /// Skip the backup step entirely. The destination file is overwritten
    /// either way; `force` only controls whether its old content survives.
    pub force: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            backup: true,
            force: false,
        }
    }
}

/// Outcome of an install run.
///
/// `skipped` is reserved for a future skip-instead-of-overwrite policy and is
/// always empty today.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// Destination paths written, in copy order
    pub installed: Vec<PathBuf>,
    /// Destination paths deliberately left untouched
    pub skipped: Vec<PathBuf>,
}

/// The sync engine. Holds the resolved roots and the component registry.
#[derive(Debug, Clone)]
pub struct Installer {
    registry: ComponentRegistry,
    source_root: PathBuf,
    dest_root: PathBuf,
}

impl Installer {
    /// Create an installer for the given roots.
    pub fn new(
        registry: ComponentRegistry,
        source_root: impl Into<PathBuf>,
        dest_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            source_root: source_root.into(),
            dest_root: dest_root.into(),
        }
    }

    /// The component registry this installer operates on.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// The destination configuration root.
    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Install the selected components.
    ///
    /// Unknown keys are filtered out up front and contribute nothing. After
    /// all components are copied the version ledger is written with the full
    /// caller-supplied key list, unknown keys included, so an install of
    /// nothing still records that this version ran.
    pub fn install<S: AsRef<str>>(
        &self,
        selected: &[S],
        options: InstallOptions,
    ) -> Result<InstallReport> {
        ensure_dir(&self.dest_root)?;

        let mut report = InstallReport::default();

        for component in self.registry.known(selected) {
            debug!(key = component.key, "installing component");

            let source = self.source_root.join(component.source);
            let target = self.dest_root.join(component.target);
            ensure_dir(&target)?;

            if component.recursive {
                copy_tree(&source, &target, options, &mut report)?;
            } else {
                copy_markdown_files(&source, &target, options, &mut report)?;
            }
        }

        let keys = selected.iter().map(|s| s.as_ref().to_string()).collect();
        VersionLedger::new(env!("CARGO_PKG_VERSION"), keys).save(&self.dest_root)?;

        Ok(report)
    }

    /// Uninstall the selected components and delete the ledger.
    ///
    /// Returns every path actually removed, in removal order. Missing target
    /// paths and unknown keys are no-ops.
    pub fn uninstall<S: AsRef<str>>(&self, selected: &[S]) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();

        for component in self.registry.known(selected) {
            let target = self.dest_root.join(component.target);
            if !target.exists() {
                continue;
            }

            debug!(key = component.key, "removing component");

            if component.owns_target_dir() {
                fs::remove_dir_all(&target).map_err(|e| Error::io(&target, e))?;
                removed.push(target);
            } else {
                remove_entries(&target, &mut removed)?;
            }
        }

        VersionLedger::remove(&self.dest_root)?;

        Ok(removed)
    }
}

/// Create a directory and its parents if missing.
fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Mirror `source` into `target`, recursing into subdirectories.
fn copy_tree(
    source: &Path,
    target: &Path,
    options: InstallOptions,
    report: &mut InstallReport,
) -> Result<()> {
    for entry in read_source_dir(source)? {
        let src_path = entry.path();
        let dest_path = target.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| Error::io(&src_path, e))?;

        if file_type.is_dir() {
            ensure_dir(&dest_path)?;
            copy_tree(&src_path, &dest_path, options, report)?;
        } else {
            copy_with_backup(&src_path, &dest_path, options)?;
            report.installed.push(dest_path);
        }
    }
    Ok(())
}

/// Copy only the top-level `.md` regular files of `source` into `target`.
///
/// Subdirectories and non-markdown entries are ignored entirely; they appear
/// in neither the installed nor the skipped list.
fn copy_markdown_files(
    source: &Path,
    target: &Path,
    options: InstallOptions,
    report: &mut InstallReport,
) -> Result<()> {
    for entry in read_source_dir(source)? {
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(MARKDOWN_EXT) {
            continue;
        }

        let src_path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&src_path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let dest_path = target.join(&name);
        copy_with_backup(&src_path, &dest_path, options)?;
        report.installed.push(dest_path);
    }
    Ok(())
}

/// Copy one file, preserving any existing destination content as `.backup`
/// first unless `force` is set. The destination is overwritten either way.
fn copy_with_backup(src: &Path, dest: &Path, options: InstallOptions) -> Result<()> {
    if dest.exists() && !options.force && options.backup {
        let backup = backup_path(dest);
        fs::copy(dest, &backup).map_err(|e| Error::io(&backup, e))?;
    }
    fs::copy(src, dest).map_err(|e| Error::io(dest, e))?;
    Ok(())
}

/// `<path>.backup`, keeping the original extension in place.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Remove every immediate entry of `dir`, leaving `dir` itself in place.
fn remove_entries(dir: &Path, removed: &mut Vec<PathBuf>) -> Result<()> {
    for entry in read_dir(dir)? {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        }
        removed.push(path);
    }
    Ok(())
}

/// Listing of a packaged source directory. A missing or non-directory
/// source gets the dedicated error so the message names the package, not
/// the user's tree.
fn read_source_dir(dir: &Path) -> Result<impl Iterator<Item = fs::DirEntry>> {
    if !dir.is_dir() {
        return Err(Error::SourceMissing {
            path: dir.to_path_buf(),
        });
    }
    read_dir(dir)
}

/// Directory listing with the failing path attached to any error.
fn read_dir(dir: &Path) -> Result<impl Iterator<Item = fs::DirEntry>> {
    let entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .collect::<std::io::Result<_>>()
        .map_err(|e| Error::io(dir, e))?;
    Ok(entries.into_iter())
}
