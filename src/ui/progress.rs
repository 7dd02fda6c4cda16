use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::Job;

/// A terminal progress bar tracking a translation job.
///
/// Automatically clears itself when dropped (RAII pattern).
pub struct JobProgressBar {
    progress_bar: ProgressBar,
}

impl JobProgressBar {
    /// Creates the bar in an indeterminate state, before the first snapshot.
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let progress_bar = ProgressBar::new(100);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{bar:30.cyan/blue}] {percent:>3}% {msg}")
                .unwrap()
                .progress_chars("=> "),
        );
        progress_bar.set_message("Submitting...");
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Redraws the bar from the latest snapshot.
    pub fn update(&self, job: &Job) {
        self.progress_bar.set_position(job.progress_percent as u64);

        let mut message = job.stage_label().to_string();
        if job.total_pages > 0 {
            message.push_str(&format!(" (page {}/{})", job.current_page, job.total_pages));
        }
        self.progress_bar.set_message(message);
    }

    /// Stops the bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Default for JobProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for JobProgressBar {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
