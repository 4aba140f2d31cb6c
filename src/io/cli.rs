//! Command-line interface for reassembling a fragmented image

use crate::composer::{self, CompositionReport, GridLayout};
use crate::io::configuration::{DEFAULT_OUTPUT, DEFAULT_WORK_DIR};
use crate::io::error::{ReassemblyError, Result};
use crate::io::image::{self, ImageSummary};
use crate::io::progress::ProgressManager;
use crate::io::workspace::{Cleanup, WorkArea};
use crate::locator;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble an image from numbered tile or strip fragments"
)]
/// Command-line arguments for the reassembly tool
pub struct Cli {
    /// ZIP archive or directory containing the numbered pieces
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image path; the extension picks the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Keep the extracted pieces after a successful run
    #[arg(long)]
    pub keep_pieces: bool,

    /// Scratch directory archives are extracted into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_WORK_DIR)]
    pub work_dir: PathBuf,

    /// Number of pieces the input should contain; a mismatch is only a warning
    #[arg(short, long, value_name = "N")]
    pub expected: Option<usize>,

    /// Use this grid instead of inferring one
    #[arg(short, long, value_name = "COLSxROWS")]
    pub grid: Option<GridLayout>,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Discovered piece count that differs from `--expected`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Count given on the command line
    pub expected: usize,
    /// Count actually discovered
    pub found: usize,
}

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Where the composed image was written
    pub output: PathBuf,
    /// Layout and placement counts
    pub report: CompositionReport,
    /// The saved image as read back from disk
    pub summary: ImageSummary,
    /// What happened to the work area
    pub cleanup: Cleanup,
    /// Set when the piece count differed from `--expected`
    pub mismatch: Option<CountMismatch>,
}

/// Runs locate, compose and cleanup for one input
pub struct Reassembler {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl Reassembler {
    /// Create a reassembler for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Locate the pieces, compose them and clean up
    ///
    /// The work area is only released after the image has been saved; on
    /// failure it stays behind for inspection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is missing or is neither an archive nor a directory
    /// - An archive would be extracted into a work area holding the output
    /// - No pieces are found
    /// - Any piece cannot be decoded or the output cannot be saved
    pub fn run(self) -> Result<Outcome> {
        let mut work_area = WorkArea::new(&self.cli.work_dir, self.cli.keep_pieces)
            .protecting(&self.cli.output);

        let sequence = locator::locate(&self.cli.input, &mut work_area)?;
        if sequence.is_empty() {
            let root = if work_area.is_prepared() {
                work_area.path().to_path_buf()
            } else {
                self.cli.input.clone()
            };
            return Err(ReassemblyError::NoPieces { root });
        }

        let mismatch = self
            .cli
            .expected
            .filter(|&n| n != sequence.len())
            .map(|expected| CountMismatch {
                expected,
                found: sequence.len(),
            });
        if let Some(CountMismatch { expected, found }) = mismatch {
            warn!("Expected {expected} pieces but found {found}");
        }

        info!("Reconstructing image from {} pieces", sequence.len());
        let report = composer::compose(
            &sequence,
            &self.cli.output,
            self.cli.grid,
            &self.progress_manager,
        )?;

        let summary = image::inspect(&self.cli.output)?;
        info!(
            "Output {} is {}x{} ({:?})",
            self.cli.output.display(),
            summary.width,
            summary.height,
            summary.color
        );

        let cleanup = work_area.release()?;
        info!("Reconstructed image: {}", self.cli.output.display());

        Ok(Outcome {
            output: self.cli.output,
            report,
            summary,
            cleanup,
            mismatch,
        })
    }
}
