//! Toast notifications

mod board;
mod toast;

pub use board::{Admission, ToastBoard, VisibleToast};
pub use toast::{Toast, ToastLevel, ToastSettings, DEFAULT_TIMEOUT_MS};
