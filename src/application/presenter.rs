//! Notification presenter use case

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::config::PresenterConfig;
use crate::domain::confirm::ConfirmOptions;
use crate::domain::error_payload::{normalize_error_payload, ErrorInput, FALLBACK_ERROR_MESSAGE};
use crate::domain::notification::{Admission, Toast, ToastBoard, ToastLevel, ToastSettings, VisibleToast};

use super::confirmation::Confirmation;
use super::ports::{DialogRenderer, DialogResponder, ToastRenderer};

/// Single entry point for user-facing notifications.
///
/// Toasts go through a `ToastBoard` before reaching the renderer, so an
/// identical toast that is still visible is not shown twice. None of the
/// operations report failure to the caller: renderer errors are logged and
/// dropped.
pub struct NotificationPresenter<T, D>
where
    T: ToastRenderer,
    D: DialogRenderer,
{
    toasts: T,
    dialogs: D,
    board: Mutex<ToastBoard>,
    config: PresenterConfig,
    confirm_defaults: ConfirmOptions,
}

impl<T, D> NotificationPresenter<T, D>
where
    T: ToastRenderer,
    D: DialogRenderer,
{
    /// Create a presenter with built-in defaults
    pub fn new(toasts: T, dialogs: D) -> Self {
        Self::with_config(toasts, dialogs, PresenterConfig::defaults())
    }

    /// Create a presenter with explicit configuration.
    /// Settings are fixed for the presenter's lifetime.
    pub fn with_config(toasts: T, dialogs: D, config: PresenterConfig) -> Self {
        let board = ToastBoard::new(config.toast_settings());
        let confirm_defaults = config.confirm_defaults();
        Self {
            toasts,
            dialogs,
            board: Mutex::new(board),
            config,
            confirm_defaults,
        }
    }

    /// Show a success toast with the default title
    pub fn success(&self, text: &str) {
        self.success_with_title(text, self.config.title_for(ToastLevel::Success));
    }

    /// Show a success toast
    pub fn success_with_title(&self, text: &str, title: &str) {
        self.show(Toast::new(ToastLevel::Success, title, text));
    }

    /// Show a warning toast with the default title
    pub fn warning(&self, text: &str) {
        self.warning_with_title(text, self.config.title_for(ToastLevel::Warning));
    }

    /// Show a warning toast
    pub fn warning_with_title(&self, text: &str, title: &str) {
        self.show(Toast::new(ToastLevel::Warning, title, text));
    }

    /// Show an info toast with the default title
    pub fn info(&self, text: &str) {
        self.info_with_title(text, self.config.title_for(ToastLevel::Info));
    }

    /// Show an info toast
    pub fn info_with_title(&self, text: &str, title: &str) {
        self.show(Toast::new(ToastLevel::Info, title, text));
    }

    /// Report an error with the default title.
    ///
    /// Text is shown as-is. Payloads are normalized and each message gets
    /// its own toast; a payload with no usable message shows a single
    /// generic fallback toast instead.
    pub fn error(&self, input: impl Into<ErrorInput>) {
        self.error_with_title(input, self.config.title_for(ToastLevel::Error));
    }

    /// Report an error with an explicit title
    pub fn error_with_title(&self, input: impl Into<ErrorInput>, title: &str) {
        match input.into() {
            ErrorInput::Text(text) => self.show(Toast::new(ToastLevel::Error, title, text)),
            ErrorInput::Payload(value) => {
                let messages = normalize_error_payload(&value);
                if messages.is_empty() {
                    debug!("Error payload had no message, showing fallback");
                    self.error(FALLBACK_ERROR_MESSAGE);
                    return;
                }
                for message in messages {
                    self.show(Toast::new(ToastLevel::Error, title, message));
                }
            }
        }
    }

    /// Ask the user to confirm.
    ///
    /// `options` are layered over the presenter's dialog defaults. The
    /// returned handle resolves to `true` only if the user confirms.
    pub fn confirm(&self, options: ConfirmOptions) -> Confirmation {
        let options = self.confirm_defaults.clone().merge(options);
        let (responder, rx) = DialogResponder::channel();

        debug!(title = ?options.title, "Opening confirmation dialog");
        self.dialogs.fire(options, responder);

        Confirmation::new(rx)
    }

    /// Toasts currently on screen, oldest first
    pub fn visible_toasts(&self) -> Vec<VisibleToast> {
        let mut board = self.board();
        board.expire(Instant::now());
        board.visible().to_vec()
    }

    /// Drop timed-out toasts. Returns how many were removed.
    pub fn expire_toasts(&self) -> usize {
        self.board().expire(Instant::now())
    }

    /// Toast settings in effect
    pub fn toast_settings(&self) -> ToastSettings {
        *self.board().settings()
    }

    /// Dialog defaults every confirm is merged over
    pub fn confirm_defaults(&self) -> &ConfirmOptions {
        &self.confirm_defaults
    }

    fn show(&self, toast: Toast) {
        let (admission, settings) = {
            let mut board = self.board();
            (board.admit(&toast, Instant::now()), *board.settings())
        };

        match admission {
            Admission::Shown => {
                if let Err(e) = self.toasts.show(&toast, &settings) {
                    warn!(level = %toast.level, error = %e, "Failed to show toast");
                    self.board().remove(&toast);
                }
            }
            Admission::Duplicate => {
                // Never extend the board past what the renderer extended.
                let timeout_reset = settings.reset_timeout_on_duplicate
                    && self.toasts.refresh(&toast, &settings)
                    && self.board().restart(&toast, Instant::now());
                debug!(level = %toast.level, timeout_reset, "Suppressed duplicate toast");
            }
        }
    }

    fn board(&self) -> MutexGuard<'_, ToastBoard> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use crate::application::ports::RenderError;
    use crate::domain::confirm::{DialogResult, DismissReason};

    #[derive(Default, Clone)]
    struct MockToasts {
        shown: Arc<Mutex<Vec<Toast>>>,
        refreshed: Arc<Mutex<Vec<Toast>>>,
        can_refresh: bool,
    }

    impl MockToasts {
        fn refreshing() -> Self {
            Self {
                can_refresh: true,
                ..Default::default()
            }
        }

        fn shown(&self) -> Vec<Toast> {
            self.shown.lock().unwrap().clone()
        }

        fn refreshed(&self) -> Vec<Toast> {
            self.refreshed.lock().unwrap().clone()
        }
    }

    impl ToastRenderer for MockToasts {
        fn show(&self, toast: &Toast, _settings: &ToastSettings) -> Result<(), RenderError> {
            self.shown.lock().unwrap().push(toast.clone());
            Ok(())
        }

        fn refresh(&self, toast: &Toast, _settings: &ToastSettings) -> bool {
            self.refreshed.lock().unwrap().push(toast.clone());
            self.can_refresh
        }
    }

    struct FailingToasts;

    impl ToastRenderer for FailingToasts {
        fn show(&self, _toast: &Toast, _settings: &ToastSettings) -> Result<(), RenderError> {
            Err(RenderError::Unavailable("no display".to_string()))
        }
    }

    /// Answers every dialog immediately with a fixed result
    struct MockDialogs {
        answer: Option<DialogResult>,
        fired: Arc<Mutex<Vec<ConfirmOptions>>>,
    }

    impl MockDialogs {
        fn answering(answer: Option<DialogResult>) -> Self {
            Self {
                answer,
                fired: Arc::default(),
            }
        }
    }

    impl DialogRenderer for MockDialogs {
        fn fire(&self, options: ConfirmOptions, responder: DialogResponder) {
            self.fired.lock().unwrap().push(options);
            match self.answer {
                Some(result) => responder.resolve(result),
                None => drop(responder),
            }
        }
    }

    fn presenter(toasts: MockToasts) -> NotificationPresenter<MockToasts, MockDialogs> {
        NotificationPresenter::new(toasts, MockDialogs::answering(None))
    }

    #[test]
    fn success_uses_default_title() {
        let toasts = MockToasts::default();
        presenter(toasts.clone()).success("Saved");
        assert_eq!(
            toasts.shown(),
            vec![Toast::new(ToastLevel::Success, "Sucesso!", "Saved")]
        );
    }

    #[test]
    fn level_helpers_use_their_titles() {
        let toasts = MockToasts::default();
        let p = presenter(toasts.clone());
        p.warning("w");
        p.info("i");
        p.info_with_title("j", "Custom");

        let shown = toasts.shown();
        assert_eq!(shown[0].title, "Atenção!");
        assert_eq!(shown[0].level, ToastLevel::Warning);
        assert_eq!(shown[1].title, "Informação");
        assert_eq!(shown[2].title, "Custom");
    }

    #[test]
    fn error_text_is_shown_directly() {
        let toasts = MockToasts::default();
        presenter(toasts.clone()).error("Boom");
        assert_eq!(
            toasts.shown(),
            vec![Toast::new(ToastLevel::Error, "Erro!", "Boom")]
        );
    }

    #[test]
    fn error_json_string_is_shown_directly() {
        let toasts = MockToasts::default();
        presenter(toasts.clone()).error(json!("Boom"));
        assert_eq!(
            toasts.shown(),
            vec![Toast::new(ToastLevel::Error, "Erro!", "Boom")]
        );
    }

    #[test]
    fn error_payload_one_toast_per_message() {
        let toasts = MockToasts::default();
        presenter(toasts.clone()).error_with_title(
            json!({ "error": { "obj": { "name": "required", "email": "invalid" } } }),
            "Validation",
        );

        let bodies: Vec<_> = toasts.shown().into_iter().map(|t| t.body).collect();
        assert_eq!(bodies, vec!["required", "invalid"]);
        assert!(toasts.shown().iter().all(|t| t.title == "Validation"));
    }

    #[test]
    fn empty_payload_shows_fallback_once() {
        let toasts = MockToasts::default();
        presenter(toasts.clone()).error(json!({}));
        assert_eq!(
            toasts.shown(),
            vec![Toast::new(ToastLevel::Error, "Erro!", FALLBACK_ERROR_MESSAGE)]
        );
    }

    #[test]
    fn duplicate_visible_toast_is_suppressed() {
        let toasts = MockToasts::default();
        let p = presenter(toasts.clone());
        p.success("Saved");
        p.success("Saved");
        assert_eq!(toasts.shown().len(), 1);
        assert_eq!(p.visible_toasts().len(), 1);
    }

    fn short_lived(toasts: MockToasts, toml: &str) -> NotificationPresenter<MockToasts, MockDialogs> {
        let config = PresenterConfig::from_toml_str(toml).unwrap();
        NotificationPresenter::with_config(toasts, MockDialogs::answering(None), config)
    }

    #[test]
    fn duplicate_does_not_outlive_renderer_that_cannot_refresh() {
        let toasts = MockToasts::default();
        let p = short_lived(toasts.clone(), "[toast]\ntimeout_ms = 300\n");

        p.info("A");
        std::thread::sleep(Duration::from_millis(150));
        p.info("A");
        assert_eq!(toasts.refreshed().len(), 1);
        std::thread::sleep(Duration::from_millis(200));
        p.info("A");

        assert_eq!(toasts.shown().len(), 2);
    }

    #[test]
    fn duplicate_restarts_timeout_when_renderer_refreshes() {
        let toasts = MockToasts::refreshing();
        let p = short_lived(toasts.clone(), "[toast]\ntimeout_ms = 300\n");

        p.info("A");
        std::thread::sleep(Duration::from_millis(150));
        p.info("A");
        std::thread::sleep(Duration::from_millis(200));
        p.info("A");

        assert_eq!(toasts.shown().len(), 1);
        assert_eq!(toasts.refreshed().len(), 2);
        assert_eq!(p.visible_toasts().len(), 1);
    }

    #[test]
    fn duplicate_without_reset_setting_skips_refresh() {
        let toasts = MockToasts::refreshing();
        let p = short_lived(toasts.clone(), "[toast]\nreset_timeout_on_duplicate = false\n");

        p.info("A");
        p.info("A");

        assert_eq!(toasts.shown().len(), 1);
        assert!(toasts.refreshed().is_empty());
    }

    #[test]
    fn duplicates_rendered_when_prevention_disabled() {
        let toasts = MockToasts::default();
        let config = PresenterConfig::from_toml_str("[toast]\nprevent_duplicates = false\n").unwrap();
        let p = NotificationPresenter::with_config(
            toasts.clone(),
            MockDialogs::answering(None),
            config,
        );
        p.error(json!({ "message": "A", "error": { "message": "A" } }));
        assert_eq!(toasts.shown().len(), 2);
    }

    #[test]
    fn failed_render_is_swallowed_and_not_tracked() {
        let p = NotificationPresenter::new(FailingToasts, MockDialogs::answering(None));
        p.error("Boom");
        assert!(p.visible_toasts().is_empty());
    }

    #[test]
    fn configured_titles_are_used() {
        let toasts = MockToasts::default();
        let config = PresenterConfig::from_toml_str("[titles]\nsuccess = \"Done\"\n").unwrap();
        let p = NotificationPresenter::with_config(
            toasts.clone(),
            MockDialogs::answering(None),
            config,
        );
        p.success("ok");
        assert_eq!(toasts.shown()[0].title, "Done");
    }

    #[tokio::test]
    async fn confirm_true_when_confirmed() {
        let p = NotificationPresenter::new(
            MockToasts::default(),
            MockDialogs::answering(Some(DialogResult::Confirmed)),
        );
        assert!(p.confirm(ConfirmOptions::empty()).await);
    }

    #[tokio::test]
    async fn confirm_false_on_cancel_close_or_drop() {
        for answer in [
            Some(DialogResult::Dismissed(DismissReason::Cancel)),
            Some(DialogResult::Dismissed(DismissReason::Close)),
            None,
        ] {
            let p = NotificationPresenter::new(MockToasts::default(), MockDialogs::answering(answer));
            assert!(!p.confirm(ConfirmOptions::empty()).await);
        }
    }

    #[test]
    fn confirm_merges_over_defaults() {
        let dialogs = MockDialogs::answering(Some(DialogResult::Confirmed));
        let fired = Arc::clone(&dialogs.fired);
        let p = NotificationPresenter::new(MockToasts::default(), dialogs);

        let _ = p.confirm(ConfirmOptions::titled("Delete?"));

        let options = fired.lock().unwrap()[0].clone();
        assert_eq!(options.title.as_deref(), Some("Delete?"));
        assert_eq!(options.confirm_button_text.as_deref(), Some("Confirmar"));
        assert_eq!(options.show_close_button, Some(true));
    }
}
