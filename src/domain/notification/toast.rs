//! Toast value objects

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default toast lifetime (10 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Severity of a toast. Drives the icon, color and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Warning,
    Info,
    Error,
}

impl ToastLevel {
    /// Title used when the caller does not provide one
    pub const fn default_title(&self) -> &'static str {
        match self {
            Self::Success => "Sucesso!",
            Self::Warning => "Atenção!",
            Self::Info => "Informação",
            Self::Error => "Erro!",
        }
    }

    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Success => "dialog-ok",
            Self::Warning => "dialog-warning",
            Self::Info => "dialog-information",
            Self::Error => "dialog-error",
        }
    }

    /// Terminal symbol for this level
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Error => "✗",
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// A single toast: level, title and body.
///
/// Two toasts are duplicates when all three fields are equal, so the same
/// text at another level or under another title is shown again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub body: String,
}

impl Toast {
    /// Create a toast with an explicit title
    pub fn new(level: ToastLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create a toast using the level's default title
    pub fn with_default_title(level: ToastLevel, body: impl Into<String>) -> Self {
        Self::new(level, level.default_title(), body)
    }
}

/// Toast display settings, fixed when the presenter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    /// Suppress a toast identical to one still visible
    pub prevent_duplicates: bool,
    /// Restart the visible toast's timeout when a duplicate is suppressed
    pub reset_timeout_on_duplicate: bool,
    /// How long a toast stays visible
    pub timeout: Duration,
    /// Show a countdown bar while the toast is visible
    pub progress_bar: bool,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            prevent_duplicates: true,
            reset_timeout_on_duplicate: true,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            progress_bar: true,
        }
    }
}
