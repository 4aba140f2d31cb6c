//! Recursive search for image pieces below a root directory

use crate::io::configuration::{IMAGE_EXTENSIONS, METADATA_DIR, METADATA_PREFIX};
use crate::io::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Whether `path` has one of the accepted image extensions (case-insensitive)
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Whether a file name marks an archive-tool resource fork
pub fn is_metadata_name(name: &str) -> bool {
    name.starts_with(METADATA_PREFIX)
}

fn is_metadata_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == METADATA_DIR
}

// Symlinks count when they resolve to a regular file
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// List every image file below `root`, in a stable file-name order
///
/// Metadata folders are pruned without being descended into, and
/// resource-fork files are dropped. A root that itself lies inside a
/// metadata folder yields nothing. Symlinks to image files are listed.
///
/// # Errors
///
/// Returns an error if a directory below `root` cannot be read
pub fn find_piece_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if root.components().any(|c| c.as_os_str() == METADATA_DIR) {
        debug!("Search root {} is a metadata folder", root.display());
        return Ok(files);
    }

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_metadata_dir(e))
    {
        let entry = entry?;
        if !is_regular_file(&entry) {
            continue;
        }

        let skip = is_metadata_name(&entry.file_name().to_string_lossy())
            || !is_image_file(entry.path());
        if skip {
            trace!("Skipping {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
