//! Scratch directory lifecycle for archive extraction
//!
//! The driver owns a [`WorkArea`] for the whole run. The locator prepares it
//! only when it has an archive to unpack; the driver releases it at the end.

use crate::io::error::{Result, WithPath, invalid_parameter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What [`WorkArea::release`] did with the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// The directory was deleted
    Removed,
    /// The directory was populated and retained on request
    Kept,
    /// The directory was never prepared, so nothing was touched
    Untouched,
}

/// Dedicated extraction directory with caller-controlled retention
#[derive(Debug)]
pub struct WorkArea {
    root: PathBuf,
    keep: bool,
    prepared: bool,
    protected: Vec<PathBuf>,
}

impl WorkArea {
    /// Describe a work area at `root`; nothing is created until [`Self::prepare`]
    pub fn new(root: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            root: root.into(),
            keep,
            prepared: false,
            protected: Vec::new(),
        }
    }

    /// Refuse to prepare if the work area would contain `path`
    ///
    /// Used for files that must outlive the run, such as the composed output.
    #[must_use]
    pub fn protecting(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected.push(path.into());
        self
    }

    /// Directory the work area lives in
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Whether [`Self::prepare`] has run
    pub const fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Empty (or create) the directory so it holds only what is extracted next
    ///
    /// `input` is the file about to be unpacked into it. A work area that
    /// would contain the input or a protected path is refused, since clearing
    /// or releasing it would delete that file.
    ///
    /// # Errors
    ///
    /// Returns an error if the work area contains `input` or a protected
    /// path, or if the old contents cannot be removed or the directory cannot
    /// be created
    pub fn prepare(&mut self, input: &Path) -> Result<&Path> {
        if contains(&self.root, input) {
            return Err(invalid_parameter(
                "work-dir",
                &self.root.display(),
                &format!("would overwrite the input '{}'", input.display()),
            ));
        }
        if let Some(kept) = self.protected.iter().find(|p| contains(&self.root, p)) {
            return Err(invalid_parameter(
                "work-dir",
                &self.root.display(),
                &format!("would delete '{}' on cleanup", kept.display()),
            ));
        }

        if self.root.exists() {
            debug!("Discarding stale work area {}", self.root.display());
            std::fs::remove_dir_all(&self.root).with_operation(&self.root, "clear work area")?;
        }
        std::fs::create_dir_all(&self.root).with_operation(&self.root, "create work area")?;

        self.prepared = true;
        Ok(&self.root)
    }

    /// Delete the directory unless it was never prepared or retention was requested
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed
    pub fn release(self) -> Result<Cleanup> {
        if !self.prepared {
            return Ok(Cleanup::Untouched);
        }
        if self.keep {
            info!("Keeping extracted pieces in {}", self.root.display());
            return Ok(Cleanup::Kept);
        }

        std::fs::remove_dir_all(&self.root).with_operation(&self.root, "remove work area")?;
        info!("Cleaned up work area {}", self.root.display());
        Ok(Cleanup::Removed)
    }
}

// Canonical comparison when both exist, absolute lexical otherwise
fn contains(dir: &Path, path: &Path) -> bool {
    match (dir.canonicalize(), path.canonicalize()) {
        (Ok(dir), Ok(path)) => path.starts_with(dir),
        _ => match (std::path::absolute(dir), std::path::absolute(path)) {
            (Ok(dir), Ok(path)) => path.starts_with(dir),
            _ => path.starts_with(dir),
        },
    }
}
