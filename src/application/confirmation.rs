//! Pending confirmation handle

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::domain::confirm::{DialogResult, DismissReason};

/// Result of a dropped dialog request: indistinguishable from a close.
const ABANDONED: DialogResult = DialogResult::Dismissed(DismissReason::Close);

/// A confirmation dialog waiting for the user.
///
/// Awaiting it yields `true` only when the user confirmed. Each call to
/// `NotificationPresenter::confirm` returns its own handle, so several
/// dialogs can be pending at once and resolve independently.
#[derive(Debug)]
#[must_use = "a confirmation does nothing unless awaited or polled"]
pub struct Confirmation {
    rx: oneshot::Receiver<DialogResult>,
}

impl Confirmation {
    pub(crate) fn new(rx: oneshot::Receiver<DialogResult>) -> Self {
        Self { rx }
    }

    /// Wait for the full dialog result instead of just the boolean
    pub async fn outcome(self) -> DialogResult {
        self.rx.await.unwrap_or(ABANDONED)
    }

    /// Check for a result without waiting.
    ///
    /// Returns `None` while the dialog is still open. Only meaningful until
    /// the first `Some`; the result is handed out once.
    pub fn try_outcome(&mut self) -> Option<DialogResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(ABANDONED),
        }
    }
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map(|r| r.is_confirmed()).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::DialogResponder;

    #[tokio::test]
    async fn resolves_true_on_confirm() {
        let (responder, rx) = DialogResponder::channel();
        let confirmation = Confirmation::new(rx);
        responder.confirm();
        assert!(confirmation.await);
    }

    #[tokio::test]
    async fn resolves_false_on_cancel() {
        let (responder, rx) = DialogResponder::channel();
        let confirmation = Confirmation::new(rx);
        responder.cancel();
        assert!(!confirmation.await);
    }

    #[tokio::test]
    async fn resolves_false_when_dropped() {
        let (responder, rx) = DialogResponder::channel();
        let confirmation = Confirmation::new(rx);
        drop(responder);
        assert!(!confirmation.await);
    }

    #[tokio::test]
    async fn outcome_reports_reason() {
        let (responder, rx) = DialogResponder::channel();
        let confirmation = Confirmation::new(rx);
        responder.resolve(DialogResult::Dismissed(DismissReason::Esc));
        assert_eq!(
            confirmation.outcome().await,
            DialogResult::Dismissed(DismissReason::Esc)
        );
    }

    #[tokio::test]
    async fn outcome_of_dropped_request_is_close() {
        let (responder, rx) = DialogResponder::channel();
        drop(responder);
        assert_eq!(Confirmation::new(rx).outcome().await, ABANDONED);
    }

    #[test]
    fn try_outcome_pending_then_ready() {
        let (responder, rx) = DialogResponder::channel();
        let mut confirmation = Confirmation::new(rx);
        assert_eq!(confirmation.try_outcome(), None);
        responder.confirm();
        assert_eq!(confirmation.try_outcome(), Some(DialogResult::Confirmed));
    }
}
