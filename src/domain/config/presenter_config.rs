//! Presenter configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::confirm::ConfirmOptions;
use crate::domain::error::ConfigError;
use crate::domain::notification::{ToastLevel, ToastSettings, DEFAULT_TIMEOUT_MS};

/// `[toast]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    pub prevent_duplicates: Option<bool>,
    pub reset_timeout_on_duplicate: Option<bool>,
    pub timeout_ms: Option<u64>,
    pub progress_bar: Option<bool>,
}

/// `[titles]` section: default title per toast level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    pub success: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
    pub error: Option<String>,
}

/// Presenter configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    pub toast: Option<ToastConfig>,
    pub titles: Option<TitleConfig>,
    pub confirm: Option<ConfirmOptions>,
}

impl PresenterConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            toast: Some(ToastConfig {
                prevent_duplicates: Some(true),
                reset_timeout_on_duplicate: Some(true),
                timeout_ms: Some(DEFAULT_TIMEOUT_MS),
                progress_bar: Some(true),
            }),
            titles: Some(TitleConfig {
                success: Some(ToastLevel::Success.default_title().to_string()),
                warning: Some(ToastLevel::Warning.default_title().to_string()),
                info: Some(ToastLevel::Info.default_title().to_string()),
                error: Some(ToastLevel::Error.default_title().to_string()),
            }),
            confirm: Some(ConfirmOptions::defaults()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(0) = self.toast.as_ref().and_then(|t| t.timeout_ms) {
            return Err(ConfigError::ValidationError {
                key: "toast.timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            toast: Self::merge_toast(self.toast, other.toast),
            titles: Self::merge_titles(self.titles, other.titles),
            confirm: match (self.confirm, other.confirm) {
                (Some(b), Some(o)) => Some(b.merge(o)),
                (b, o) => o.or(b),
            },
        }
    }

    fn merge_toast(base: Option<ToastConfig>, other: Option<ToastConfig>) -> Option<ToastConfig> {
        match (base, other) {
            (Some(b), Some(o)) => Some(ToastConfig {
                prevent_duplicates: o.prevent_duplicates.or(b.prevent_duplicates),
                reset_timeout_on_duplicate: o
                    .reset_timeout_on_duplicate
                    .or(b.reset_timeout_on_duplicate),
                timeout_ms: o.timeout_ms.or(b.timeout_ms),
                progress_bar: o.progress_bar.or(b.progress_bar),
            }),
            (b, o) => o.or(b),
        }
    }

    fn merge_titles(base: Option<TitleConfig>, other: Option<TitleConfig>) -> Option<TitleConfig> {
        match (base, other) {
            (Some(b), Some(o)) => Some(TitleConfig {
                success: o.success.or(b.success),
                warning: o.warning.or(b.warning),
                info: o.info.or(b.info),
                error: o.error.or(b.error),
            }),
            (b, o) => o.or(b),
        }
    }

    /// Resolve toast settings, falling back to built-in defaults per field
    pub fn toast_settings(&self) -> ToastSettings {
        let defaults = ToastSettings::default();
        let Some(toast) = self.toast.as_ref() else {
            return defaults;
        };

        ToastSettings {
            prevent_duplicates: toast.prevent_duplicates.unwrap_or(defaults.prevent_duplicates),
            reset_timeout_on_duplicate: toast
                .reset_timeout_on_duplicate
                .unwrap_or(defaults.reset_timeout_on_duplicate),
            timeout: toast
                .timeout_ms
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            progress_bar: toast.progress_bar.unwrap_or(defaults.progress_bar),
        }
    }

    /// Default title for a toast level
    pub fn title_for(&self, level: ToastLevel) -> &str {
        let configured = self.titles.as_ref().and_then(|t| match level {
            ToastLevel::Success => t.success.as_deref(),
            ToastLevel::Warning => t.warning.as_deref(),
            ToastLevel::Info => t.info.as_deref(),
            ToastLevel::Error => t.error.as_deref(),
        });
        configured.unwrap_or(level.default_title())
    }

    /// Confirm dialog defaults, built-in values underneath the configured ones
    pub fn confirm_defaults(&self) -> ConfirmOptions {
        let base = ConfirmOptions::defaults();
        match self.confirm.clone() {
            Some(configured) => base.merge(configured),
            None => base,
        }
    }
}
