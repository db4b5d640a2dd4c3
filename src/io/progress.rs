//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Steps each file goes through, in display order
pub const FILE_STEPS: [&str; 5] = ["load", "label", "centroids", "rasterize", "render"];

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch runs
///
/// Shows one bar per file for small batches; larger batches also get an
/// overall file counter and only the most recent files keep a visible bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(FILE_STEPS.len() as u64);
            pb.set_style(STEP_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of files the manager was initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Handle to the shared display, for output that must not tear the bars
    pub fn multi_progress(&self) -> MultiProgress {
        self.multi_progress.clone()
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        self.file_bars
            .get(index % MAX_INDIVIDUAL_PROGRESS_BARS.max(1))
    }

    /// Reset a bar for a new file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.bar_for(index) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.reset();
            bar.set_prefix(display_name);
            bar.set_message(String::new());
        }
    }

    /// Report that a file has entered the named step
    pub fn enter_step(&self, index: usize, step: &str) {
        if let Some(bar) = self.bar_for(index) {
            let position = FILE_STEPS
                .iter()
                .position(|&candidate| candidate == step)
                .unwrap_or(0);
            bar.set_position(position as u64);
            bar.set_message(step.to_string());
        }
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&self, index: usize, elapsed: Duration) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(FILE_STEPS.len() as u64);
            bar.set_message(format!("✓ {elapsed:.2?}"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
