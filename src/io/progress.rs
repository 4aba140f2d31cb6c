//! Placement progress display

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_HZ};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Placing: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many pieces have been pasted onto the canvas
///
/// A quiet manager keeps the same API but never draws, so the composer does
/// not need to care whether output is enabled.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::stderr_with_hz(PROGRESS_REFRESH_HZ),
        );
        bar.set_style(PLACEMENT_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a composition of `total` placements
    pub fn initialize(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    /// Record that the piece at `path` has been placed
    pub fn piece_placed(&self, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(name.into_owned());
        self.bar.inc(1);
    }

    /// Number of placements recorded since the last [`Self::initialize`]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
