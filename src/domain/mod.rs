//! Domain layer - Core notification logic
//!
//! Contains value objects, the error payload normalizer and domain errors.
//! This layer has no dependencies on renderers or the terminal.

pub mod config;
pub mod confirm;
pub mod error;
pub mod error_payload;
pub mod notification;

// Re-export common types
pub use config::PresenterConfig;
pub use confirm::{ConfirmIcon, ConfirmOptions, DialogResult, DismissReason};
pub use error::*;
pub use error_payload::{normalize_error_payload, ErrorInput, ErrorPayload, FALLBACK_ERROR_MESSAGE};
pub use notification::{Admission, Toast, ToastBoard, ToastLevel, ToastSettings, VisibleToast};
