//! Dialog renderer port interface

use tokio::sync::oneshot;

use crate::domain::confirm::{ConfirmOptions, DialogResult, DismissReason};

/// Completion handle for one open dialog.
///
/// Consumed by the first answer, so a dialog resolves at most once. Dropping
/// it without answering reads as a close on the waiting side.
#[derive(Debug)]
pub struct DialogResponder {
    tx: oneshot::Sender<DialogResult>,
}

impl DialogResponder {
    /// Create a responder and the receiver it completes
    pub fn channel() -> (Self, oneshot::Receiver<DialogResult>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Complete the dialog with a result
    pub fn resolve(self, result: DialogResult) {
        // Receiver gone means nobody is waiting any more.
        let _ = self.tx.send(result);
    }

    /// User pressed the confirm button
    pub fn confirm(self) {
        self.resolve(DialogResult::Confirmed);
    }

    /// User pressed the cancel button
    pub fn cancel(self) {
        self.resolve(DialogResult::Dismissed(DismissReason::Cancel));
    }

    /// User closed the dialog
    pub fn close(self) {
        self.resolve(DialogResult::Dismissed(DismissReason::Close));
    }

    /// Whether the waiting side has gone away
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Port for modal confirmation dialogs
pub trait DialogRenderer: Send + Sync {
    /// Open a modal dialog.
    ///
    /// Must not block. The renderer keeps `responder` until the user acts
    /// and then resolves it exactly once.
    ///
    /// # Arguments
    /// * `options` - Fully merged dialog options
    /// * `responder` - Completion handle for this dialog
    fn fire(&self, options: ConfirmOptions, responder: DialogResponder);
}

/// Blanket implementation for boxed renderer types
impl DialogRenderer for Box<dyn DialogRenderer> {
    fn fire(&self, options: ConfirmOptions, responder: DialogResponder) {
        self.as_ref().fire(options, responder)
    }
}
