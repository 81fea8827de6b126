//! Terminal confirmation dialog adapter

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

use colored::*;
use tracing::{debug, warn};

use crate::application::ports::{DialogRenderer, DialogResponder};
use crate::domain::confirm::{ConfirmOptions, DialogResult, DismissReason};

type SharedReader = Arc<Mutex<Box<dyn BufRead + Send>>>;
type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Answers accepted as confirmation besides the confirm button label
const YES_ANSWERS: &[&str] = &["y", "yes", "s", "sim"];

/// Prompts on the terminal and reads the answer from a line of input.
///
/// Each dialog is answered on a blocking task, so `fire` returns at once.
/// Dialogs opened while another is waiting queue up behind the input lock
/// and are prompted one after the other. A dialog whose caller stopped
/// waiting is skipped without prompting.
pub struct TerminalDialogRenderer {
    input: SharedReader,
    output: SharedWriter,
}

impl TerminalDialogRenderer {
    /// Create a renderer reading stdin and prompting on stderr
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stderr())
    }

    /// Create a renderer with custom input and output
    pub fn with_io(
        input: impl BufRead + Send + 'static,
        output: impl Write + Send + 'static,
    ) -> Self {
        Self {
            input: Arc::new(Mutex::new(Box::new(input))),
            output: Arc::new(Mutex::new(Box::new(output))),
        }
    }

    /// Render the prompt for a dialog
    pub fn format_prompt(options: &ConfirmOptions) -> String {
        let icon = options.icon_or_default();
        let mut prompt = String::new();

        let title = options.title.as_deref().unwrap_or_default();
        prompt.push_str(&format!("{} {}\n", icon.symbol().magenta(), title.bold()));
        if let Some(text) = options.text.as_deref() {
            prompt.push_str(&format!("  {}\n", text));
        }

        let mut buttons = format!("  [s] {}", options.confirm_button_text_or_default());
        if options.show_cancel_button_or_default() {
            buttons.push_str(&format!("   [n] {}", options.cancel_button_text_or_default()));
        }
        prompt.push_str(&buttons);
        prompt.push_str(" > ");
        prompt
    }

    /// Interpret one line of input. `None` means input ended.
    pub fn parse_answer(line: Option<&str>, options: &ConfirmOptions) -> DialogResult {
        let Some(line) = line else {
            return DialogResult::Dismissed(DismissReason::Close);
        };

        let answer = line.trim().to_lowercase();
        let confirm_label = options.confirm_button_text_or_default().to_lowercase();
        if YES_ANSWERS.contains(&answer.as_str()) || answer == confirm_label {
            return DialogResult::Confirmed;
        }

        if options.show_cancel_button_or_default() {
            DialogResult::Dismissed(DismissReason::Cancel)
        } else {
            DialogResult::Dismissed(DismissReason::Close)
        }
    }

    /// Prompt and read one answer. `None` if nobody awaits the answer
    /// any more.
    fn run_dialog(
        input: &SharedReader,
        output: &SharedWriter,
        options: &ConfirmOptions,
        responder: &DialogResponder,
    ) -> io::Result<Option<DialogResult>> {
        let mut input = input
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "input lock poisoned"))?;

        // Queued behind another prompt; the caller may have given up since.
        if responder.is_abandoned() {
            return Ok(None);
        }

        {
            let mut output = output
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "output lock poisoned"))?;
            write!(output, "{}", Self::format_prompt(options))?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        let line = (read > 0).then_some(line.as_str());
        Ok(Some(Self::parse_answer(line, options)))
    }
}

impl Default for TerminalDialogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogRenderer for TerminalDialogRenderer {
    fn fire(&self, options: ConfirmOptions, responder: DialogResponder) {
        let input = Arc::clone(&self.input);
        let output = Arc::clone(&self.output);

        let task = move || match Self::run_dialog(&input, &output, &options, &responder) {
            Ok(Some(result)) => responder.resolve(result),
            Ok(None) => debug!("Skipped abandoned confirmation prompt"),
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed");
                responder.close();
            }
        };

        // Reading stdin blocks, so keep it off the caller
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
