//! Stage progress reporting for conversion runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:<24} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Creates per-stage progress bars, or hidden bars when reporting is off
///
/// Pipeline stages receive a bar unconditionally and tick it per cell;
/// whether anything reaches the terminal is decided here.
#[derive(Debug, Clone, Copy)]
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a manager; `enabled` controls whether bars are displayed
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Start a progress bar for a pipeline stage with `total` steps
    pub fn stage(&self, name: &'static str, total: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(total);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(name);
        bar
    }

    /// Finish a stage bar, clearing it from the terminal
    pub fn finish(&self, bar: &ProgressBar) {
        if self.enabled {
            bar.finish_and_clear();
        }
    }
}
