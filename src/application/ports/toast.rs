//! Toast renderer port interface

use thiserror::Error;

use crate::domain::notification::{Toast, ToastSettings};

/// Toast rendering errors
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Toast renderer unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to show toast: {0}")]
    Failed(String),
}

/// Port for toast display
pub trait ToastRenderer: Send + Sync {
    /// Show a toast.
    ///
    /// # Arguments
    /// * `toast` - Level, title and body to display
    /// * `settings` - Timeout and countdown settings the toast must honor
    ///
    /// # Returns
    /// Ok(()) once the toast is on screen, error otherwise
    fn show(&self, toast: &Toast, settings: &ToastSettings) -> Result<(), RenderError>;

    /// Restart the timeout of a toast that is still on screen.
    ///
    /// Returns `false` when the renderer cannot extend it; the toast then
    /// keeps its original expiry.
    fn refresh(&self, _toast: &Toast, _settings: &ToastSettings) -> bool {
        false
    }
}

/// Blanket implementation for boxed renderer types
impl ToastRenderer for Box<dyn ToastRenderer> {
    fn show(&self, toast: &Toast, settings: &ToastSettings) -> Result<(), RenderError> {
        self.as_ref().show(toast, settings)
    }

    fn refresh(&self, toast: &Toast, settings: &ToastSettings) -> bool {
        self.as_ref().refresh(toast, settings)
    }
}
