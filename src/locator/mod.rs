/// ZIP archive detection and extraction
pub mod archive;
/// Recursive image file discovery with metadata filtering
pub mod discovery;
/// Sequence numbering, ordering and gap reporting
pub mod sequence;

pub use sequence::{Piece, PieceSequence};

use crate::io::error::{ReassemblyError, Result};
use crate::io::workspace::WorkArea;
use std::path::Path;
use tracing::{info, warn};

/// Turn an archive or directory into an ordered piece sequence
///
/// Archives are unpacked into `work_area` (cleared first); directories are
/// searched in place. Gaps in the numbering are logged as warnings. An empty
/// result is returned as-is; deciding that it is fatal is up to the caller.
///
/// # Errors
///
/// Returns an error if:
/// - `input` does not exist
/// - `input` is neither a ZIP archive nor a directory
/// - The archive cannot be unpacked or the search root cannot be walked
pub fn locate(input: &Path, work_area: &mut WorkArea) -> Result<PieceSequence> {
    if !input.exists() {
        return Err(ReassemblyError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let root = if archive::is_archive(input)? {
        info!("Extracting pieces from {}", input.display());
        let dest = work_area.prepare(input)?;
        let entries = archive::extract_all(input, dest)?;
        info!("Unpacked {entries} archive entries into {}", dest.display());
        dest.to_path_buf()
    } else if input.is_dir() {
        input.to_path_buf()
    } else {
        return Err(ReassemblyError::UnrecognizedInput {
            path: input.to_path_buf(),
        });
    };

    let files = discovery::find_piece_files(&root)?;
    let sequence = PieceSequence::from_paths(files);
    info!("Found {} image pieces", sequence.len());
    report_gaps(&sequence);

    Ok(sequence)
}

fn report_gaps(pieces: &PieceSequence) {
    let gaps = pieces.gaps();
    if gaps.is_empty() {
        return;
    }

    let (min, max) = pieces.bounds().unwrap_or_default();
    warn!(
        "{} piece numbers missing between {min} and {max}: {}",
        pieces.missing_count(),
        sequence::format_gaps(&gaps)
    );
}
