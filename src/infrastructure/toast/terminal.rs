//! Terminal toast adapter

use std::io::{self, Write};
use std::sync::Mutex;

use colored::*;

use crate::application::ports::{RenderError, ToastRenderer};
use crate::domain::notification::{Toast, ToastLevel, ToastSettings};

/// Prints toasts as single colored lines, stderr by default
pub struct TerminalToastRenderer {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalToastRenderer {
    /// Create a renderer writing to stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a renderer writing to any sink
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Format a toast line, e.g. `✓ Sucesso!: Saved (10s)`
    pub fn format_toast(toast: &Toast, settings: &ToastSettings) -> String {
        let symbol = match toast.level {
            ToastLevel::Success => toast.level.symbol().green(),
            ToastLevel::Warning => toast.level.symbol().yellow(),
            ToastLevel::Info => toast.level.symbol().cyan(),
            ToastLevel::Error => toast.level.symbol().red(),
        };

        let mut line = format!("{} {}: {}", symbol, toast.title.bold(), toast.body);
        if settings.progress_bar {
            let countdown = format!("({}s)", settings.timeout.as_secs());
            line.push(' ');
            line.push_str(&countdown.dimmed().to_string());
        }
        line
    }
}

impl Default for TerminalToastRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastRenderer for TerminalToastRenderer {
    fn show(&self, toast: &Toast, settings: &ToastSettings) -> Result<(), RenderError> {
        let line = Self::format_toast(toast, settings);
        let mut out = self
            .out
            .lock()
            .map_err(|_| RenderError::Failed("output lock poisoned".to_string()))?;

        writeln!(out, "{}", line).map_err(|e| RenderError::Failed(e.to_string()))?;
        out.flush().map_err(|e| RenderError::Failed(e.to_string()))
    }

    /// Printed lines do not expire; the countdown follows the presenter's board.
    fn refresh(&self, _toast: &Toast, _settings: &ToastSettings) -> bool {
        true
    }
}
