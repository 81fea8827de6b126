//! Toast renderer adapters
//!
//! Terminal output is the default; desktop notifications go through
//! notify-rust.

mod desktop;
mod terminal;

pub use desktop::DesktopToastRenderer;
pub use terminal::TerminalToastRenderer;

use crate::application::ports::ToastRenderer;

/// Create the toast renderer for the requested target
pub fn create_toast_renderer(desktop: bool) -> Box<dyn ToastRenderer> {
    if desktop {
        Box::new(DesktopToastRenderer::new())
    } else {
        Box::new(TerminalToastRenderer::new())
    }
}
