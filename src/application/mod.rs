//! Application layer - Presenter and port interfaces
//!
//! Contains the notification presenter and the trait definitions
//! for the renderers and configuration store it depends on.

pub mod confirmation;
pub mod ports;
pub mod presenter;

pub use confirmation::Confirmation;
pub use presenter::NotificationPresenter;
