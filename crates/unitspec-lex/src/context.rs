//! Per-parse shared state between lexer and parser.
//!
//! The original design keeps this as module-level/global state: "current
//! unit system", encoding, a restart flag, and the "current product is a
//! time quantity" bit all live in process-wide variables (§9). That makes a
//! second concurrent parse on the same process unsafe. Here it is instead a
//! small struct threaded through both the lexer and the parser for the
//! duration of one parse, so reentrancy and concurrent parses are safe by
//! construction — the re-architecture the spec's own design notes recommend.

use std::cell::Cell;

/// Shared feedback channel between the parser and the lexer for one parse.
///
/// The parser sets [`ParseContext::set_time_context`] when a `product`
/// expression reduces, recording whether it is convertible to seconds. The
/// lexer consults [`ParseContext::time_context`] (via
/// [`crate::Lexer::expect_timestamp`]) when deciding whether the digits
/// following a `SHIFT` are a packed date or a plain number (§4.2.5).
#[derive(Debug, Default)]
pub struct ParseContext {
    time_context: Cell<bool>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self {
            time_context: Cell::new(false),
        }
    }

    /// Whether the most recently reduced product expression is convertible
    /// to seconds. Defaults to `false`: if the unit system has no second
    /// unit to test convertibility against, time context is simply never
    /// signalled rather than guessed (§9 open question).
    pub fn time_context(&self) -> bool {
        self.time_context.get()
    }

    pub fn set_time_context(&self, value: bool) {
        self.time_context.set(value);
    }
}
