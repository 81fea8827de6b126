//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: terminal and
//! desktop toast renderers, the terminal confirmation prompt, and the
//! XDG config store.

pub mod config;
pub mod dialog;
pub mod toast;

// Re-export adapters
pub use config::XdgConfigStore;
pub use dialog::TerminalDialogRenderer;
pub use toast::{create_toast_renderer, DesktopToastRenderer, TerminalToastRenderer};
