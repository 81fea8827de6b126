//! Presenter configuration

mod presenter_config;

pub use presenter_config::{PresenterConfig, TitleConfig, ToastConfig};
