//! The pluggable error-message sink (§6's `error_message_handler`).

/// Receives the user-facing message for each diagnostic a parse produced,
/// in addition to whatever this crate itself logs via `tracing`. A caller
/// that doesn't care can use [`NullReporter`]; `unitspec-drv`'s own demo
/// binary uses one that prints to stderr.
pub trait Reporter {
    fn report(&self, message: &str);
}

/// Discards every message. The default when no reporter is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _message: &str) {}
}

/// Writes each message to stderr, one per line.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}

impl<F: Fn(&str)> Reporter for F {
    fn report(&self, message: &str) {
        self(message)
    }
}
