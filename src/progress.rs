//! Progress display for install attempts

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that tracks the current install phase
pub struct InstallProgress {
    spinner: Option<ProgressBar>,
}

impl InstallProgress {
    /// Create a progress display; `quiet` suppresses all output
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self { spinner: None };
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(spinner_style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self {
            spinner: Some(spinner),
        }
    }

    /// Announce the phase currently running
    pub fn phase(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Finish with a success message
    pub fn finish(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
            println!("{} {message}", style("✓").green().bold());
        }
    }

    /// Clear the spinner without a message (error paths)
    pub fn clear(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}
