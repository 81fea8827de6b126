//! Desktop toast adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. Restarting a visible toast's timeout
//! needs the notification server's replace-by-id support, so it is only
//! available on freedesktop platforms.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use notify_rust::{Notification, Timeout};
use tracing::warn;

use crate::application::ports::{RenderError, ToastRenderer};
use crate::domain::notification::{Toast, ToastSettings};

/// Server id of a delivered notification and when it disappears
#[derive(Debug, Clone, Copy)]
struct Delivered {
    id: u32,
    expires_at: Instant,
}

type DeliveredMap = Arc<Mutex<HashMap<Toast, Delivered>>>;

/// Shows toasts as desktop notifications
pub struct DesktopToastRenderer {
    /// Application name for notifications
    app_name: String,
    delivered: DeliveredMap,
}

impl DesktopToastRenderer {
    /// Create a new desktop renderer
    pub fn new() -> Self {
        Self::with_app_name("Herald")
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            delivered: Arc::default(),
        }
    }

    /// Expiry in the unit the notification server expects
    fn timeout_millis(timeout: Duration) -> u32 {
        u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
    }

    /// Server id of a delivered toast that has not expired yet
    fn live_id(&self, toast: &Toast, now: Instant) -> Option<u32> {
        lock(&self.delivered)
            .get(toast)
            .filter(|d| d.expires_at > now)
            .map(|d| d.id)
    }

    /// Send the toast from a blocking task, replacing `replaces` if given
    fn deliver(&self, toast: &Toast, settings: &ToastSettings, replaces: Option<u32>) {
        let app_name = self.app_name.clone();
        let toast = toast.clone();
        let timeout = settings.timeout;
        let delivered = Arc::clone(&self.delivered);

        // notify-rust operations can block, so keep them off the caller
        let task = move || {
            let mut notification = Notification::new();
            notification
                .appname(&app_name)
                .summary(&toast.title)
                .body(&toast.body)
                .icon(toast.level.icon_name())
                .timeout(Timeout::Milliseconds(Self::timeout_millis(timeout)));

            send(notification, toast, timeout, replaces, &delivered);
        };

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn_blocking(task);
            }
            Err(_) => {
                std::thread::spawn(task);
            }
        }
    }
}

impl Default for DesktopToastRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastRenderer for DesktopToastRenderer {
    /// Returns once the notification is queued. Delivery failures are
    /// logged, not returned.
    fn show(&self, toast: &Toast, settings: &ToastSettings) -> Result<(), RenderError> {
        self.deliver(toast, settings, None);
        Ok(())
    }

    fn refresh(&self, toast: &Toast, settings: &ToastSettings) -> bool {
        if !cfg!(all(unix, not(target_os = "macos"))) {
            return false;
        }
        let Some(id) = self.live_id(toast, Instant::now()) else {
            return false;
        };
        self.deliver(toast, settings, Some(id));
        true
    }
}

fn lock(delivered: &DeliveredMap) -> MutexGuard<'_, HashMap<Toast, Delivered>> {
    delivered.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Remember a delivered toast, forgetting the ones that are gone
fn record(delivered: &DeliveredMap, toast: Toast, id: u32, timeout: Duration) {
    let now = Instant::now();
    let mut delivered = lock(delivered);
    delivered.retain(|_, d| d.expires_at > now);
    delivered.insert(
        toast,
        Delivered {
            id,
            expires_at: now + timeout,
        },
    );
}

#[cfg(all(unix, not(target_os = "macos")))]
fn send(
    mut notification: Notification,
    toast: Toast,
    timeout: Duration,
    replaces: Option<u32>,
    delivered: &DeliveredMap,
) {
    if let Some(id) = replaces {
        notification.id(id);
    }
    match notification.show() {
        Ok(handle) => record(delivered, toast, handle.id(), timeout),
        Err(e) => {
            warn!(level = %toast.level, error = %e, "Failed to show desktop notification");
            lock(delivered).remove(&toast);
        }
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn send(
    notification: Notification,
    toast: Toast,
    _timeout: Duration,
    _replaces: Option<u32>,
    _delivered: &DeliveredMap,
) {
    if let Err(e) = notification.show() {
        warn!(level = %toast.level, error = %e, "Failed to show desktop notification");
    }
}
