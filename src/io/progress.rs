//! Terminal progress display for the carve and blur stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>6}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar reused across pipeline stages
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
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that never draws, for tests and quiet runs
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Reset the bar for a new stage of `length` steps
    pub fn start_stage(&self, name: &'static str, length: usize) {
        self.bar.set_prefix(name);
        self.bar.set_message(String::new());
        self.bar.set_length(length as u64);
        self.bar.set_position(0);
    }

    /// Advance the current stage by one step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Current position within the stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Mark the current stage as done
    pub fn finish_stage(&self, message: &'static str) {
        self.bar.set_message(message);
        if let Some(length) = self.bar.length() {
            self.bar.set_position(length);
        }
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
