/// Output raster allocation and piece pasting
pub mod canvas;
/// Grid layout inference
pub mod layout;

pub use canvas::{Canvas, CanvasMode, PieceFormat};
pub use layout::{GridLayout, infer_layout};

use crate::io::error::{ReassemblyError, Result};
use crate::io::image;
use crate::io::progress::ProgressManager;
use crate::locator::PieceSequence;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a composition pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionReport {
    /// Grid the pieces were placed on
    pub layout: GridLayout,
    /// Shape of the first piece
    pub piece: PieceFormat,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pieces pasted onto the canvas
    pub placed: usize,
    /// Pieces in the input sequence
    pub discovered: usize,
}

impl CompositionReport {
    /// Pieces left over because the grid ran out of cells
    pub const fn unplaced(&self) -> usize {
        self.discovered.saturating_sub(self.placed)
    }
}

/// Place every piece of `sequence` on a fresh canvas, row-major
///
/// The layout comes from [`infer_layout`] on the first piece's shape unless
/// `layout` overrides it. Pieces beyond the grid's capacity are not placed and
/// are reported as a warning.
///
/// # Errors
///
/// Returns an error if:
/// - `sequence` is empty
/// - Any piece cannot be opened or decoded
/// - The canvas dimensions overflow
pub fn render(
    sequence: &PieceSequence,
    layout: Option<GridLayout>,
    progress: &ProgressManager,
) -> Result<(Canvas, CompositionReport)> {
    let first = sequence.first().ok_or(ReassemblyError::NoPieces {
        root: PathBuf::new(),
    })?;
    let piece = PieceFormat::of(&image::load(&first.path)?);
    debug!(
        "First piece {} is {}x{} ({:?})",
        first.path.display(),
        piece.width,
        piece.height,
        piece.mode
    );

    let layout = match layout {
        Some(layout) => layout,
        None => infer_layout(sequence.len(), piece.width, piece.height)?,
    };
    let mut canvas = Canvas::allocate(layout, piece)?;
    info!("Reconstructing {layout} grid");
    info!(
        "Final image will be {}x{} pixels",
        canvas.width(),
        canvas.height()
    );

    let capacity = usize::try_from(layout.capacity()).unwrap_or(usize::MAX);
    let placements = sequence.len().min(capacity);
    progress.initialize(placements);

    for (index, entry) in sequence.pieces().iter().take(placements).enumerate() {
        let (col, row) = layout.cell(index as u64);
        let img = image::load(&entry.path)?;
        canvas.paste(
            &img,
            col * u64::from(piece.width),
            row * u64::from(piece.height),
        );
        progress.piece_placed(&entry.path);
    }
    progress.finish();

    let report = CompositionReport {
        layout,
        piece,
        width: canvas.width(),
        height: canvas.height(),
        placed: placements,
        discovered: sequence.len(),
    };

    if report.unplaced() > 0 {
        warn!(
            "Grid {layout} holds {} cells: placed {} of {} pieces, {} left over",
            layout.capacity(),
            report.placed,
            report.discovered,
            report.unplaced()
        );
    }

    Ok((canvas, report))
}

/// Render `sequence` and save the result to `output`
///
/// Nothing is written unless every placement succeeds.
///
/// # Errors
///
/// Returns an error if rendering fails or the image cannot be saved
pub fn compose(
    sequence: &PieceSequence,
    output: &Path,
    layout: Option<GridLayout>,
    progress: &ProgressManager,
) -> Result<CompositionReport> {
    let (canvas, report) = render(sequence, layout, progress)?;
    image::save(&canvas.into_image(), output)?;
    info!("Saved {} pieces to {}", report.placed, output.display());
    Ok(report)
}
