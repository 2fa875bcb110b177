//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print a success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an informational message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }

    /// Print plain output to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
