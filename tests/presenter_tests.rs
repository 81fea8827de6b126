//! Presenter integration tests with recording renderers

use std::sync::{Arc, Mutex};

use serde_json::json;

use herald::application::ports::{DialogRenderer, DialogResponder, RenderError, ToastRenderer};
use herald::domain::{DialogResult, DismissReason, FALLBACK_ERROR_MESSAGE};
use herald::{ConfirmOptions, NotificationPresenter, PresenterConfig, Toast, ToastLevel, ToastSettings};

/// Records every toast it is asked to show
#[derive(Clone, Default)]
struct RecordingToasts {
    shown: Arc<Mutex<Vec<(Toast, ToastSettings)>>>,
}

impl RecordingToasts {
    fn bodies(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|(toast, _)| toast.body.clone())
            .collect()
    }

    fn toasts(&self) -> Vec<Toast> {
        self.shown
            .lock()
            .unwrap()
            .iter()
            .map(|(toast, _)| toast.clone())
            .collect()
    }
}

impl ToastRenderer for RecordingToasts {
    fn show(&self, toast: &Toast, settings: &ToastSettings) -> Result<(), RenderError> {
        self.shown.lock().unwrap().push((toast.clone(), *settings));
        Ok(())
    }
}

/// Keeps dialogs open until the test answers them
#[derive(Clone, Default)]
struct PendingDialogs {
    open: Arc<Mutex<Vec<(ConfirmOptions, DialogResponder)>>>,
}

impl PendingDialogs {
    fn take(&self) -> Vec<(ConfirmOptions, DialogResponder)> {
        std::mem::take(&mut *self.open.lock().unwrap())
    }
}

impl DialogRenderer for PendingDialogs {
    fn fire(&self, options: ConfirmOptions, responder: DialogResponder) {
        self.open.lock().unwrap().push((options, responder));
    }
}

fn presenter() -> (
    NotificationPresenter<RecordingToasts, PendingDialogs>,
    RecordingToasts,
    PendingDialogs,
) {
    let toasts = RecordingToasts::default();
    let dialogs = PendingDialogs::default();
    let presenter = NotificationPresenter::new(toasts.clone(), dialogs.clone());
    (presenter, toasts, dialogs)
}

#[test]
fn string_error_is_one_toast_with_that_body() {
    let (presenter, toasts, _) = presenter();
    presenter.error("Session expired");
    assert_eq!(
        toasts.toasts(),
        vec![Toast::new(ToastLevel::Error, "Erro!", "Session expired")]
    );
}

#[test]
fn top_level_message_payload() {
    let (presenter, toasts, _) = presenter();
    presenter.error(json!({ "message": "A" }));
    assert_eq!(toasts.bodies(), vec!["A"]);
}

#[test]
fn nested_message_payload() {
    let (presenter, toasts, _) = presenter();
    presenter.error(json!({ "error": { "message": "B" } }));
    assert_eq!(toasts.bodies(), vec!["B"]);
}

#[test]
fn validation_messages_in_mapping_order() {
    let (presenter, toasts, _) = presenter();
    presenter.error(json!({ "error": { "obj": { "field1": "bad", "field2": "also bad" } } }));
    assert_eq!(toasts.bodies(), vec!["bad", "also bad"]);
}

#[test]
fn empty_payload_shows_single_fallback() {
    let (presenter, toasts, _) = presenter();
    presenter.error(json!({}));
    assert_eq!(toasts.bodies(), vec![FALLBACK_ERROR_MESSAGE]);
}

#[test]
fn non_object_payload_shows_fallback() {
    let (presenter, toasts, _) = presenter();
    presenter.error(json!([1, 2, 3]));
    assert_eq!(toasts.bodies(), vec![FALLBACK_ERROR_MESSAGE]);
}

#[test]
fn json_string_error_is_shown_as_is() {
    for text in ["Boom", "", r#"{"message":"not parsed"}"#] {
        let (presenter, toasts, _) = presenter();
        presenter.error(json!(text));
        assert_eq!(toasts.bodies(), vec![text]);
    }
}

#[test]
fn renderer_receives_configured_settings() {
    let toasts = RecordingToasts::default();
    let config = PresenterConfig::from_toml_str("[toast]\ntimeout_ms = 1500\nprogress_bar = false\n")
        .unwrap();
    let presenter = NotificationPresenter::with_config(toasts.clone(), PendingDialogs::default(), config);

    presenter.info("hello");

    let settings = toasts.shown.lock().unwrap()[0].1;
    assert_eq!(settings.timeout.as_millis(), 1500);
    assert!(!settings.progress_bar);
    assert!(settings.prevent_duplicates);
}

#[test]
fn identical_toast_while_visible_is_rendered_once() {
    let (presenter, toasts, _) = presenter();
    presenter.warning("Disk almost full");
    presenter.warning("Disk almost full");
    presenter.warning_with_title("Disk almost full", "Storage");

    assert_eq!(toasts.toasts().len(), 2);
    assert_eq!(presenter.visible_toasts().len(), 2);
}

#[tokio::test]
async fn confirm_resolves_true_on_confirm() {
    let (presenter, _, dialogs) = presenter();
    let confirmation = presenter.confirm(ConfirmOptions::empty());

    let (_, responder) = dialogs.take().pop().unwrap();
    responder.confirm();

    assert!(confirmation.await);
}

#[tokio::test]
async fn confirm_resolves_false_on_cancel_and_close() {
    let (presenter, _, dialogs) = presenter();
    let cancelled = presenter.confirm(ConfirmOptions::empty());
    let closed = presenter.confirm(ConfirmOptions::empty());

    let mut open = dialogs.take();
    let (_, close_responder) = open.pop().unwrap();
    let (_, cancel_responder) = open.pop().unwrap();
    cancel_responder.cancel();
    close_responder.close();

    assert!(!cancelled.await);
    assert!(!closed.await);
}

#[tokio::test]
async fn overlapping_confirms_resolve_independently() {
    let (presenter, _, dialogs) = presenter();
    let first = presenter.confirm(ConfirmOptions::titled("first"));
    let second = presenter.confirm(ConfirmOptions::titled("second"));

    let open = dialogs.take();
    assert_eq!(open.len(), 2);

    // Answer in reverse order
    let mut open = open.into_iter();
    let (first_options, first_responder) = open.next().unwrap();
    let (second_options, second_responder) = open.next().unwrap();
    assert_eq!(first_options.title.as_deref(), Some("first"));
    assert_eq!(second_options.title.as_deref(), Some("second"));

    second_responder.confirm();
    first_responder.resolve(DialogResult::Dismissed(DismissReason::Backdrop));

    assert!(second.await);
    assert_eq!(
        first.outcome().await,
        DialogResult::Dismissed(DismissReason::Backdrop)
    );
}

#[test]
fn pending_confirm_reports_nothing_until_answered() {
    let (presenter, _, dialogs) = presenter();
    let mut confirmation = presenter.confirm(ConfirmOptions::empty());
    assert_eq!(confirmation.try_outcome(), None);

    let (options, responder) = dialogs.take().pop().unwrap();
    assert_eq!(options, ConfirmOptions::defaults());
    responder.confirm();

    assert_eq!(confirmation.try_outcome(), Some(DialogResult::Confirmed));
}
