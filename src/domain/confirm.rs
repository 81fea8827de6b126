//! Confirmation dialog options and results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidIconError;

/// Icon shown at the top of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmIcon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl ConfirmIcon {
    /// All icons, in display order
    pub const ALL: [ConfirmIcon; 5] = [
        Self::Success,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Question,
    ];

    /// Get the string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Question => "question",
        }
    }

    /// Terminal symbol for this icon
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Question => "?",
        }
    }
}

impl fmt::Display for ConfirmIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfirmIcon {
    type Err = InvalidIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == lower)
            .ok_or_else(|| InvalidIconError {
                input: s.to_string(),
            })
    }
}

/// Options for a confirmation dialog.
/// All fields are optional so caller options can be layered over defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub text: Option<String>,
    pub icon: Option<ConfirmIcon>,
    pub confirm_button_text: Option<String>,
    pub cancel_button_text: Option<String>,
    pub confirm_button_color: Option<String>,
    pub show_cancel_button: Option<bool>,
    pub show_close_button: Option<bool>,
    pub height_auto: Option<bool>,
    pub cancel_button_class: Option<String>,
}

impl ConfirmOptions {
    /// Built-in dialog defaults
    pub fn defaults() -> Self {
        Self {
            title: None,
            text: None,
            icon: Some(ConfirmIcon::Question),
            confirm_button_text: Some("Confirmar".to_string()),
            cancel_button_text: Some("Cancelar".to_string()),
            confirm_button_color: Some("#7030a0".to_string()),
            show_cancel_button: Some(true),
            show_close_button: Some(true),
            height_auto: Some(false),
            cancel_button_class: Some("Swal__cancelButton".to_string()),
        }
    }

    /// Create empty options (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Options with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the body text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: ConfirmIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Merge these options with another set, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            text: other.text.or(self.text),
            icon: other.icon.or(self.icon),
            confirm_button_text: other.confirm_button_text.or(self.confirm_button_text),
            cancel_button_text: other.cancel_button_text.or(self.cancel_button_text),
            confirm_button_color: other.confirm_button_color.or(self.confirm_button_color),
            show_cancel_button: other.show_cancel_button.or(self.show_cancel_button),
            show_close_button: other.show_close_button.or(self.show_close_button),
            height_auto: other.height_auto.or(self.height_auto),
            cancel_button_class: other.cancel_button_class.or(self.cancel_button_class),
        }
    }

    /// Confirm button label, or "Confirmar" if not set
    pub fn confirm_button_text_or_default(&self) -> &str {
        self.confirm_button_text.as_deref().unwrap_or("Confirmar")
    }

    /// Cancel button label, or "Cancelar" if not set
    pub fn cancel_button_text_or_default(&self) -> &str {
        self.cancel_button_text.as_deref().unwrap_or("Cancelar")
    }

    /// Icon, or question if not set
    pub fn icon_or_default(&self) -> ConfirmIcon {
        self.icon.unwrap_or(ConfirmIcon::Question)
    }

    /// Whether the cancel button is shown, false if not set
    pub fn show_cancel_button_or_default(&self) -> bool {
        self.show_cancel_button.unwrap_or(false)
    }

    /// Whether the close button is shown, false if not set
    pub fn show_close_button_or_default(&self) -> bool {
        self.show_close_button.unwrap_or(false)
    }
}

/// Why a dialog closed without being confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Cancel button
    Cancel,
    /// Close button in the corner
    Close,
    /// Escape key
    Esc,
    /// Click outside the dialog
    Backdrop,
    /// Dialog timed out on its own
    Timer,
}

/// How a confirmation dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Dismissed(DismissReason),
}

impl DialogResult {
    /// True only when the user pressed confirm
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Reason the dialog was dismissed, if it was
    pub const fn dismiss_reason(&self) -> Option<DismissReason> {
        match self {
            Self::Confirmed => None,
            Self::Dismissed(reason) => Some(*reason),
        }
    }
}
