//! Toast countdown for `--wait`

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::{DialogRenderer, ToastRenderer};
use crate::application::NotificationPresenter;

/// How often the countdown is redrawn
const TICK: Duration = Duration::from_millis(100);

/// Block until every visible toast has expired.
///
/// When the presenter's settings ask for a progress bar, the remaining
/// lifetime of the longest-lived toast is drawn as a shrinking bar.
pub async fn wait_for_toasts<T, D>(presenter: &NotificationPresenter<T, D>)
where
    T: ToastRenderer,
    D: DialogRenderer,
{
    let settings = presenter.toast_settings();
    let bar = settings
        .progress_bar
        .then(|| countdown_bar(settings.timeout));

    loop {
        let visible = presenter.visible_toasts();
        let now = std::time::Instant::now();
        let Some(remaining) = visible.iter().map(|v| v.remaining(now)).max() else {
            break;
        };

        if let Some(ref bar) = bar {
            bar.set_position(remaining.as_millis() as u64);
            bar.set_message(format!("{:.1}s", remaining.as_secs_f64()));
        }

        tokio::time::sleep(remaining.min(TICK)).await;
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}

fn countdown_bar(timeout: Duration) -> ProgressBar {
    let bar = ProgressBar::new(timeout.as_millis() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:30.cyan/blue} {msg}") {
        bar.set_style(style.progress_chars("█░ "));
    }
    bar.set_position(timeout.as_millis() as u64);
    bar
}
