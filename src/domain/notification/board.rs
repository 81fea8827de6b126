//! Visible toast tracking.
//!
//! The `ToastBoard` remembers which toasts are on screen and until when, so
//! the presenter can suppress duplicates and report remaining lifetime for
//! countdown bars. Every operation takes the current instant explicitly.

use std::time::{Duration, Instant};

use super::toast::{Toast, ToastSettings};

/// Outcome of offering a toast to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The toast is new and should be rendered.
    Shown,
    /// An identical toast is still visible; nothing should be rendered.
    Duplicate,
}

/// A toast currently on screen.
#[derive(Debug, Clone)]
pub struct VisibleToast {
    toast: Toast,
    shown_at: Instant,
    expires_at: Instant,
}

impl VisibleToast {
    /// The toast being displayed
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// When the toast was shown, or when its timeout was last restarted
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// When the toast disappears
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Whether the toast has timed out at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before the toast disappears
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }

    /// Fraction of lifetime left, from 1.0 (just shown) to 0.0 (expired).
    pub fn remaining_fraction(&self, now: Instant) -> f64 {
        let total = self.expires_at.saturating_duration_since(self.shown_at);
        if total.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// In-memory list of visible toasts, oldest first.
#[derive(Debug)]
pub struct ToastBoard {
    settings: ToastSettings,
    visible: Vec<VisibleToast>,
}

impl ToastBoard {
    /// Create an empty board with fixed settings
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            settings,
            visible: Vec::new(),
        }
    }

    /// Settings the board was created with
    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Offer a toast for display at `now`.
    ///
    /// Expired toasts are pruned first. With `prevent_duplicates` off every
    /// toast is admitted. A duplicate leaves the visible toast's expiry
    /// untouched; see [`ToastBoard::restart`].
    pub fn admit(&mut self, toast: &Toast, now: Instant) -> Admission {
        self.expire(now);

        if self.settings.prevent_duplicates && self.visible.iter().any(|v| v.toast == *toast) {
            return Admission::Duplicate;
        }

        self.visible.push(VisibleToast {
            toast: toast.clone(),
            shown_at: now,
            expires_at: now + self.settings.timeout,
        });
        Admission::Shown
    }

    /// Restart the timeout of a visible toast at `now`.
    /// Returns `false` if the toast is not on the board.
    pub fn restart(&mut self, toast: &Toast, now: Instant) -> bool {
        self.expire(now);

        match self.visible.iter_mut().rev().find(|v| v.toast == *toast) {
            Some(existing) => {
                existing.shown_at = now;
                existing.expires_at = now + self.settings.timeout;
                true
            }
            None => false,
        }
    }

    /// Drop toasts that have timed out. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.visible.len();
        self.visible.retain(|v| !v.is_expired(now));
        before - self.visible.len()
    }

    /// Forget a visible toast, e.g. when it never made it to the screen.
    /// Returns `true` if it was on the board.
    pub fn remove(&mut self, toast: &Toast) -> bool {
        match self.visible.iter().rposition(|v| v.toast == *toast) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Currently visible toasts, oldest first
    pub fn visible(&self) -> &[VisibleToast] {
        &self.visible
    }

    /// Number of visible toasts
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Whether nothing is visible
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Remove every visible toast
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}
