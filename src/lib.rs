//! Herald - toast notifications and confirmation dialogs behind one presenter
//!
//! Application code reports success, warnings, information and errors
//! through a single `NotificationPresenter`, and asks yes/no questions with
//! `confirm`. Rendering is delegated to injected adapters.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Toasts, the visible-toast board, confirm options, and the
//!   error payload normalizer
//! - **Application**: The presenter and the renderer/config port interfaces
//! - **Infrastructure**: Adapter implementations (terminal, notify-rust, XDG config)
//! - **CLI**: Command-line driver for the presenter

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::{Confirmation, NotificationPresenter};
pub use domain::{ConfirmOptions, ErrorInput, PresenterConfig, Toast, ToastLevel, ToastSettings};
