//! Result display
//!
//! The session tells a [`ResultPresenter`] what to show; the terminal
//! implementation prints it.

use std::fmt;
use std::io::Write;

use scrawl_ipc::ControlState;
use tracing::warn;

/// Displays recognition results and status
pub trait ResultPresenter {
    /// A request was submitted
    fn show_pending(&mut self);

    /// No request is being waited on any more
    fn hide_pending(&mut self);

    /// Replace the displayed result
    fn show_formula(&mut self, formula: &str);

    /// Replace the displayed result with a failure report
    fn show_error(&mut self, status: &str, body: &str);

    /// Remove the displayed result
    fn clear(&mut self);

    /// Typeset the displayed result (math rendering hook)
    fn typeset(&mut self) {}

    /// Undo/redo availability changed
    fn control_state_changed(&mut self, _state: ControlState) {}
}

/// Writes results as lines of text
pub struct TerminalPresenter<W: Write> {
    out: W,
    current: Option<String>,
    pending: bool,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current: None,
            pending: false,
        }
    }

    /// Text currently displayed, if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line; a failed write is logged and the session carries on
    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write result: {}", e);
        }
    }
}

impl<W: Write> ResultPresenter for TerminalPresenter<W> {
    fn show_pending(&mut self) {
        self.pending = true;
    }

    fn hide_pending(&mut self) {
        self.pending = false;
    }

    fn show_formula(&mut self, formula: &str) {
        self.emit(format_args!("result: {formula}"));
        self.current = Some(formula.to_string());
    }

    fn show_error(&mut self, status: &str, body: &str) {
        let text = format!("{status} : {body}");
        self.emit(format_args!("error: {text}"));
        self.current = Some(text);
    }

    fn clear(&mut self) {
        if self.current.take().is_some() {
            self.emit(format_args!("result cleared"));
        }
    }
}
