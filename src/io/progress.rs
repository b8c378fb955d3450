//! Progress display for the complexity analysis

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SIZE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Sizes: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Two-level progress display: one bar over grid sizes, one over the
/// trials of the size being timed
pub struct ProgressReporter {
    multi_progress: MultiProgress,
    size_bar: Option<ProgressBar>,
    trial_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            size_bar: None,
            trial_bar: None,
        }
    }

    /// Create a reporter that draws nothing, for tests and quiet runs
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(
                indicatif::ProgressDrawTarget::hidden(),
            ),
            size_bar: None,
            trial_bar: None,
        }
    }

    /// Create the bars for a run over `size_count` grid sizes
    pub fn initialize(&mut self, size_count: usize) {
        let size_bar = ProgressBar::new(size_count as u64);
        size_bar.set_style(SIZE_STYLE.clone());
        self.size_bar = Some(self.multi_progress.add(size_bar));

        let trial_bar = ProgressBar::new(0);
        trial_bar.set_style(TRIAL_STYLE.clone());
        self.trial_bar = Some(self.multi_progress.add(trial_bar));
    }

    /// Reset the trial bar for a new grid size
    pub fn start_size(&self, dimension: usize, trials: usize) {
        if let Some(ref bar) = self.trial_bar {
            bar.set_length(trials as u64);
            bar.set_position(0);
            bar.set_prefix(format!("{dimension}x{dimension}"));
            bar.set_message(String::new());
        }
    }

    /// Advance the trial bar by one search
    pub fn complete_trial(&self) {
        if let Some(ref bar) = self.trial_bar {
            bar.inc(1);
        }
    }

    /// Record the mean time of a finished size
    pub fn complete_size(&self, mean: Duration) {
        if let Some(ref bar) = self.trial_bar {
            bar.set_message(format!("{mean:?} per search"));
        }
        if let Some(ref bar) = self.size_bar {
            bar.inc(1);
        }
    }

    /// Number of sizes completed so far
    pub fn sizes_completed(&self) -> u64 {
        self.size_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.size_bar {
            bar.finish_with_message("All sizes timed");
        }
        let _ = self.multi_progress.clear();
    }
}
