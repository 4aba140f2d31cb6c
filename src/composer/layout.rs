//! Grid layout inference from piece count and piece shape
//!
//! One-pixel-wide pieces are vertical strips stitched side by side, and
//! one-pixel-tall pieces are horizontal strips stacked top to bottom. Any other
//! piece is a tile, laid out on the most square grid whose column count
//! divides the piece count, never wider than it is tall.

use crate::io::error::{ReassemblyError, Result, invalid_parameter};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Columns and rows of the reconstructed grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLayout {
    /// Pieces per row
    pub columns: u32,
    /// Pieces per column
    pub rows: u32,
}

impl GridLayout {
    /// Create a layout; both dimensions must be non-zero
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{columns}x{rows}"),
                &"columns and rows must be at least 1",
            ));
        }
        Ok(Self { columns, rows })
    }

    /// Number of cells in the grid
    pub const fn capacity(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Grid cell `(col, row)` of the `index`-th piece in row-major order
    pub const fn cell(&self, index: u64) -> (u64, u64) {
        let columns = self.columns as u64;
        (index % columns, index / columns)
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

impl FromStr for GridLayout {
    type Err = ReassemblyError;

    /// Parse `COLSxROWS`, e.g. `40x25`
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || invalid_parameter("grid", &s, &"expected COLSxROWS, e.g. 40x25");

        let (columns, rows) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        let columns = columns.trim().parse().map_err(|_invalid| malformed())?;
        let rows = rows.trim().parse().map_err(|_invalid| malformed())?;
        Self::new(columns, rows)
    }
}

/// Choose the grid for `piece_count` pieces of `piece_width` x `piece_height`
///
/// # Errors
///
/// Returns an error if `piece_count` is zero or does not fit in a `u32`
/// grid dimension
pub fn infer_layout(piece_count: usize, piece_width: u32, piece_height: u32) -> Result<GridLayout> {
    if piece_count == 0 {
        return Err(ReassemblyError::NoPieces {
            root: PathBuf::new(),
        });
    }

    let count = u32::try_from(piece_count).map_err(|_overflow| {
        invalid_parameter(
            "piece count",
            &piece_count,
            &"too many pieces for a single canvas",
        )
    })?;

    if piece_width == 1 {
        return GridLayout::new(count, 1);
    }
    if piece_height == 1 {
        return GridLayout::new(1, count);
    }

    // 1 always divides, so the search cannot come up empty
    let columns = (1..=count.isqrt())
        .rev()
        .find(|columns| count % columns == 0)
        .unwrap_or(1);
    GridLayout::new(columns, count / columns)
}
