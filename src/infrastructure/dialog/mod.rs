//! Confirmation dialog adapters

mod terminal;

pub use terminal::TerminalDialogRenderer;
