//! ZIP archive detection and extraction

use crate::io::configuration::{ZIP_EMPTY_SIGNATURE, ZIP_LOCAL_SIGNATURE};
use crate::io::error::{Result, WithPath};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Whether `path` is a regular file starting with a ZIP signature
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub fn is_archive(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    let mut file = File::open(path).with_operation(path, "open archive")?;
    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == ZIP_LOCAL_SIGNATURE || magic == ZIP_EMPTY_SIGNATURE),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e).with_operation(path, "read archive header"),
    }
}

/// Unpack every entry of the archive at `path` into `dest`
///
/// Entry names that would escape `dest` are rejected by the zip reader.
/// Returns the number of entries in the archive.
///
/// # Errors
///
/// Returns an error if the archive is corrupt or an entry cannot be written
pub fn extract_all(path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(path).with_operation(path, "open archive")?;
    let mut archive = ZipArchive::new(file).with_path(path)?;
    let entries = archive.len();
    archive.extract(dest).with_path(path)?;
    Ok(entries)
}
