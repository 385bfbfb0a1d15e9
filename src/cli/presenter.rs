//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::capture::Elapsed;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Show the live recording display
    pub fn show_recording(&mut self) {
        let message = Self::format_recording(Elapsed::default());
        self.start_spinner(&message);
    }

    /// Refresh the recording display with the current elapsed time
    pub fn update_recording(&self, elapsed: Elapsed) {
        self.update_spinner(&Self::format_recording(elapsed));
    }

    /// Format the recording display line
    pub fn format_recording(elapsed: Elapsed) -> String {
        format!("Recording {}  (Enter to stop)", elapsed)
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the server's response message)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_line_starts_at_zero() {
        let line = Presenter::format_recording(Elapsed::default());
        assert!(line.contains("00:00"));
        assert!(line.contains("Enter to stop"));
    }

    #[test]
    fn recording_line_ticks_by_the_second() {
        assert!(Presenter::format_recording(Elapsed::from_secs(1)).contains("00:01"));
        assert!(Presenter::format_recording(Elapsed::from_secs(2)).contains("00:02"));
        assert!(Presenter::format_recording(Elapsed::from_secs(3)).contains("00:03"));
    }

    #[test]
    fn recording_line_past_one_hour() {
        assert!(Presenter::format_recording(Elapsed::from_secs(3600)).contains("60:00"));
    }
}
