//! Reassembly of a full image from numbered tile or strip fragments
//!
//! Pieces are located in a ZIP archive or directory and ordered by the first
//! number in their file names, then pasted row-major onto a canvas whose grid
//! is inferred from the piece count and piece shape.

#![forbid(unsafe_code)]

/// Grid layout inference and canvas composition
pub mod composer;
/// Input/output operations, configuration and error handling
pub mod io;
/// Piece discovery, archive extraction and sequence ordering
pub mod locator;

pub use composer::{GridLayout, compose, infer_layout};
pub use io::error::{ReassemblyError, Result};
pub use locator::{Piece, PieceSequence, locate};
