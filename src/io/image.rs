//! Image decoding and export with path-aware errors

use crate::io::error::{ReassemblyError, Result, WithPath};
use image::{ColorType, DynamicImage, ImageFormat};
use std::path::Path;

/// Dimensions and color layout of an image on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSummary {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Decoded color type
    pub color: ColorType,
}

/// Decode the image at `path`
///
/// # Errors
///
/// Returns [`ReassemblyError::ImageLoad`] if the file cannot be opened or decoded
pub fn load(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_path(path)
}

/// Save `img` to `path`, the format chosen by the file extension
///
/// Missing parent directories are created first. An image with alpha saved
/// as JPEG is flattened to RGB since the encoder rejects alpha.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a supported image format
/// - The parent directory cannot be created
/// - The encoder fails to write the file
pub fn save(img: &DynamicImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| ReassemblyError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_operation(parent, "create directory")?;
    }

    let result = if format == ImageFormat::Jpeg && img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(path, format)
    } else {
        img.save_with_format(path, format)
    };

    result.map_err(|e| ReassemblyError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reopen a saved image and report what it contains
///
/// # Errors
///
/// Returns [`ReassemblyError::ImageLoad`] if the file cannot be decoded
pub fn inspect(path: &Path) -> Result<ImageSummary> {
    let img = load(path)?;
    Ok(ImageSummary {
        width: img.width(),
        height: img.height(),
        color: img.color(),
    })
}
