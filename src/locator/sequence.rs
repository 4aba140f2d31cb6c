//! Sequence numbers, ordering and gap detection for discovered pieces
//!
//! A piece's number is the first run of decimal digits in its file name, so
//! `tile_007_v2.png` is piece 7. Names carrying several numbers (timestamps,
//! version suffixes) must put the sequence number first.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// A single fragment image and its position in the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Where the fragment lives on disk
    pub path: PathBuf,
    /// Number extracted from the file name
    pub number: u64,
}

impl Piece {
    /// Build a piece from its path, numbering it from the file name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let number = path
            .file_name()
            .map_or(0, |name| sequence_number(&name.to_string_lossy()));
        Self { path, number }
    }
}

/// Extract the first maximal run of ASCII digits in `name`
///
/// Returns 0 when `name` holds no digits. Runs too large for `u64` saturate.
pub fn sequence_number(name: &str) -> u64 {
    name.bytes()
        .skip_while(|b| !b.is_ascii_digit())
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

/// Pieces ordered ascending by sequence number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSequence {
    pieces: Vec<Piece>,
}

impl PieceSequence {
    /// Order `pieces` by number; equal numbers keep their relative order
    pub fn new(mut pieces: Vec<Piece>) -> Self {
        pieces.sort_by_key(|piece| piece.number);
        Self { pieces }
    }

    /// Number each path and order the result
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(paths.into_iter().map(Piece::from_path).collect())
    }

    /// Number of pieces
    pub const fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether no pieces were found
    pub const fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in placement order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Paths in placement order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.pieces.iter().map(|piece| piece.path.as_path())
    }

    /// First piece in the sequence
    pub fn first(&self) -> Option<&Piece> {
        self.pieces.first()
    }

    /// Smallest and largest sequence numbers observed
    pub fn bounds(&self) -> Option<(u64, u64)> {
        Some((self.pieces.first()?.number, self.pieces.last()?.number))
    }

    /// Runs of numbers inside [`Self::bounds`] that no piece carries
    pub fn gaps(&self) -> Vec<RangeInclusive<u64>> {
        self.pieces
            .windows(2)
            .filter_map(|pair| match pair {
                [a, b] if b.number > a.number.saturating_add(1) => {
                    Some(a.number + 1..=b.number - 1)
                }
                _ => None,
            })
            .collect()
    }

    /// Every number inside [`Self::bounds`] that no piece carries
    pub fn missing_numbers(&self) -> impl Iterator<Item = u64> {
        self.gaps().into_iter().flatten()
    }

    /// How many numbers inside [`Self::bounds`] are missing
    pub fn missing_count(&self) -> u64 {
        self.gaps()
            .iter()
            .map(|gap| gap.end() - gap.start() + 1)
            .sum()
    }
}

impl<'a> IntoIterator for &'a PieceSequence {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

/// Render gaps compactly, e.g. `2, 5-9, 12`
pub fn format_gaps(gaps: &[RangeInclusive<u64>]) -> String {
    gaps.iter()
        .map(|gap| {
            if gap.start() == gap.end() {
                gap.start().to_string()
            } else {
                format!("{}-{}", gap.start(), gap.end())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
