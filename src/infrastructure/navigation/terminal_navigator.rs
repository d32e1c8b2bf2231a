//! Navigator that hands the destination to the terminal user.

use std::io::Write;
use std::sync::Mutex;

use colored::Colorize;
use tracing::{error, info};

use crate::domain::ports::Navigator;

/// Writes the destination to an output stream instead of driving a browser.
pub struct TerminalNavigator<W: Write + Send> {
    out: Mutex<W>,
    home_url: String,
}

impl TerminalNavigator<std::io::Stdout> {
    pub fn stdout(home_url: impl Into<String>) -> Self {
        Self::new(std::io::stdout(), home_url)
    }
}

impl<W: Write + Send> TerminalNavigator<W> {
    pub fn new(out: W, home_url: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            home_url: home_url.into(),
        }
    }

    fn emit(&self, label: &str, destination: &str) {
        info!("{} {}", label, destination);

        let Ok(mut out) = self.out.lock() else {
            error!("Output stream lock poisoned");
            return;
        };
        if let Err(e) = writeln!(out, "{} {}", label.green().bold(), destination.underline()) {
            error!("Failed to write destination: {}", e);
        }
    }
}

impl<W: Write + Send> Navigator for TerminalNavigator<W> {
    fn navigate(&self, destination: &str) {
        self.emit("→", destination);
    }

    fn go_home(&self) {
        self.emit("⌂", &self.home_url);
    }
}
