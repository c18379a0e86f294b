//! CLI presenter for output formatting

use colored::*;

use crate::domain::config::ServiceConfig;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the startup banner
    pub fn server_starting(&self, config: &ServiceConfig) {
        eprintln!(
            "{} {} starting on {}...",
            "●".cyan(),
            config.app_name.bold(),
            config.bind_address()
        );
        eprintln!(
            "  backend: {}, timeout: {}s, icon passthrough: {}",
            config.backend,
            config.request_timeout.as_secs(),
            config.icon_passthrough
        );
    }

    /// Format the route table shown at startup
    pub fn format_routes(&self) -> String {
        ["GET  /", "POST /notification", "POST /alert"]
            .iter()
            .map(|route| format!("  {}", route))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
