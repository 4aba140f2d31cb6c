//! Output raster and piece placement

use crate::composer::layout::GridLayout;
use crate::io::error::{Result, computation_error};
use image::{DynamicImage, RgbImage, RgbaImage, imageops};

/// Pixel layout of the composed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    /// Three 8-bit channels
    Rgb,
    /// Three 8-bit channels plus alpha
    Rgba,
}

impl CanvasMode {
    /// RGBA when the piece carries an alpha channel, RGB otherwise
    pub fn for_piece(piece: &DynamicImage) -> Self {
        if piece.color().has_alpha() {
            Self::Rgba
        } else {
            Self::Rgb
        }
    }
}

/// Shape of the first piece, which every placement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceFormat {
    /// Piece width in pixels
    pub width: u32,
    /// Piece height in pixels
    pub height: u32,
    /// Canvas mode implied by the piece's color type
    pub mode: CanvasMode,
}

impl PieceFormat {
    /// Read the dimensions and mode of a decoded piece
    pub fn of(piece: &DynamicImage) -> Self {
        Self {
            width: piece.width(),
            height: piece.height(),
            mode: CanvasMode::for_piece(piece),
        }
    }
}

/// Blank raster sized for a whole grid of pieces
#[derive(Debug, Clone)]
pub enum Canvas {
    /// Canvas without transparency
    Rgb(RgbImage),
    /// Canvas with transparency
    Rgba(RgbaImage),
}

impl Canvas {
    /// Allocate a zeroed canvas of `layout` cells, each `format` sized
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions overflow `u32`
    pub fn allocate(layout: GridLayout, format: PieceFormat) -> Result<Self> {
        let width = layout.columns.checked_mul(format.width).ok_or_else(|| {
            computation_error(
                "canvas size",
                &format!("{} columns of {}px is too wide", layout.columns, format.width),
            )
        })?;
        let height = layout.rows.checked_mul(format.height).ok_or_else(|| {
            computation_error(
                "canvas size",
                &format!("{} rows of {}px is too tall", layout.rows, format.height),
            )
        })?;

        Ok(match format.mode {
            CanvasMode::Rgb => Self::Rgb(RgbImage::new(width, height)),
            CanvasMode::Rgba => Self::Rgba(RgbaImage::new(width, height)),
        })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.width(),
            Self::Rgba(img) => img.width(),
        }
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.height(),
            Self::Rgba(img) => img.height(),
        }
    }

    /// Pixel mode of the canvas
    pub const fn mode(&self) -> CanvasMode {
        match self {
            Self::Rgb(_) => CanvasMode::Rgb,
            Self::Rgba(_) => CanvasMode::Rgba,
        }
    }

    /// Overwrite the region at `(x, y)` with `piece`, clipped to the canvas
    ///
    /// The piece is converted to the canvas mode; alpha is copied, not blended.
    pub fn paste(&mut self, piece: &DynamicImage, x: u64, y: u64) {
        let (x, y) = (x as i64, y as i64);
        match self {
            Self::Rgb(img) => imageops::replace(img, &piece.to_rgb8(), x, y),
            Self::Rgba(img) => imageops::replace(img, &piece.to_rgba8(), x, y),
        }
    }

    /// Convert into a [`DynamicImage`] for encoding
    pub fn into_image(self) -> DynamicImage {
        match self {
            Self::Rgb(img) => DynamicImage::ImageRgb8(img),
            Self::Rgba(img) => DynamicImage::ImageRgba8(img),
        }
    }
}
