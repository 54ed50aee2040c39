//! Diagnostic collection and reporting.
//!
//! The lexer and parser never abort on the first error: every failing
//! production still releases its in-flight unit and keeps going far enough
//! for the driver to classify the failure as `SYNTAX` or `UNKNOWN` (§4.5).
//! `Handler` is the sink both sides push into; the driver reads it back
//! once the parse has finished.
//!
//! # Examples
//!
//! ```
//! use unitspec_util::{Span, Handler};
//! use unitspec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Don't recognize \"pico\"")
//!     .code(DiagnosticCode::E_PARSE_UNKNOWN_IDENTIFIER)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A single diagnostic message with severity, location, and optional
/// supporting detail.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Collects diagnostics emitted during one parse. Not `Sync` — matches the
/// spec's single-parse-at-a-time concurrency model (§5); a caller running
/// several parses concurrently uses one `Handler` per parse.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: RefCell<bool>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(false),
        }
    }

    /// A handler that panics as soon as an error diagnostic is emitted.
    /// Useful in tests that assert a given input never reaches an error
    /// path.
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(true),
        }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if *self.panic_on_error.borrow() && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// The first error diagnostic, if any — what the driver surfaces
    /// through its reporter (§7).
    pub fn first_error(&self) -> Option<Diagnostic> {
        self.diagnostics
            .borrow()
            .iter()
            .find(|d| d.level == Level::Error)
            .cloned()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn diagnostic_builders() {
        let diag = Diagnostic::error("bad token", Span::DUMMY)
            .with_note("note")
            .with_help("help");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.notes, vec!["note"]);
        assert_eq!(diag.helps, vec!["help"]);
    }

    #[test]
    fn handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn handler_emit_and_count() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn handler_first_error_returns_earliest() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e2", Span::DUMMY));
        assert_eq!(handler.first_error().unwrap().message, "e1");
    }

    #[test]
    fn handler_clear_resets() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
    }

    #[test]
    fn handler_panicking_panics_on_error() {
        let handler = Handler::new_panicking();
        let result = std::panic::catch_unwind(|| {
            handler.emit_diagnostic(Diagnostic::error("boom", Span::DUMMY));
        });
        assert!(result.is_err());
    }

    #[test]
    fn handler_build_error_sets_code() {
        let handler = Handler::new();
        handler
            .build_error(Span::DUMMY, "unknown identifier")
            .code(DiagnosticCode::E_PARSE_UNKNOWN_IDENTIFIER)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_PARSE_UNKNOWN_IDENTIFIER));
    }
}
