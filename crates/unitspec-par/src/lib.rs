//! unitspec-par — recursive-descent parsing and identifier resolution for
//! unit specifications (§4.3, §4.4).
//!
//! Grounded on `faxc-par`'s `Parser<'a>` shape (a struct holding a handler
//! reference and a token cursor, with `current_token`/`advance`/`expect`)
//! and its multi-file `impl<'a> Parser<'a>` extension idiom (`stmt.rs`,
//! `items.rs`, `expr.rs` each add methods to the one struct declared here).
//! The teacher's general-purpose-language AST and its Pratt-parsing
//! `mod bp` binding-power table have no counterpart: §4.4's grammar already
//! names a distinct non-terminal per precedence level (`spec`/`shift`/
//! `product`/`power`/`basic`), so the parser is a straightforward
//! recursive-descent function per level rather than an operator-precedence
//! table.
//!
//! Unlike `faxc-par`, which tokenizes the whole input up front into a
//! `Vec<Token>`, this parser pulls tokens from the lexer one at a time and,
//! at the three grammar positions where lexing is context-sensitive (right
//! after `SHIFT`, right after `DATE`, right after `CLOCK`), calls the
//! lexer's dedicated continuation entry points instead of its generic
//! `next_token`. Pre-tokenizing would lose that positional information.

mod basic;
mod identifier;
mod product;
mod shift;
mod timestamp;

use std::cell::Cell;

use unitspec_lex::{Lexer, Token, TokenKind};
use unitspec_util::{DiagnosticBuilder, Handler, Span};
use unitspec_util::diagnostic::DiagnosticCode;
use unitspec_sys::{Unit, UnitSystem};

/// Which of the two ways a parse can fail, so the driver can classify
/// `SYNTAX` against `UNKNOWN` (§4.5 step 6, §7).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// A lexical or grammatical error: an unexpected token, a missing
    /// `)`, a forbidden numeric literal, trailing garbage.
    Syntax,
    /// An identifier that §4.3's prefix-peeling loop could not resolve to
    /// any known unit.
    UnknownIdentifier,
}

/// The outcome of one [`parse`] call.
pub struct ParseResult {
    /// `Some` whenever the grammar reduced to a unit, even if a later
    /// identifier turned out unknown partway through a larger expression
    /// — callers should still check [`ParseResult::failure`] before
    /// trusting `unit`.
    pub unit: Option<Unit>,
    pub failure: Option<Failure>,
    /// Byte offset into `source` of the first token the parser did not
    /// consume — `source.len()` if every token was consumed. The driver
    /// uses this to detect and report trailing input (§4.5 step 5).
    pub consumed: usize,
}

/// Parses `source` against `system`'s catalog, reporting lexical and
/// grammatical diagnostics to `handler`.
///
/// This is `unitspec-par`'s sole public entry point; `unitspec-drv`'s
/// driver algorithm calls it once per `parse()` request after trimming and
/// transcoding (§4.5 steps 3-5).
pub fn parse<S: UnitSystem>(source: &str, system: &S, handler: &Handler) -> ParseResult {
    let mut parser = Parser::new(source, system, handler);
    let unit = parser.parse_spec();
    ParseResult {
        unit,
        failure: parser.failure.get(),
        consumed: parser.current.span.start,
    }
}

/// Recursive-descent parser over one unit-specification string.
///
/// Holds the lexer by value (not a pre-tokenized stream, see module docs)
/// plus the one lookahead token needed by an LL(1) grammar, a reference to
/// the catalog semantic actions resolve against, and the handler
/// diagnostics are reported to.
struct Parser<'a, S: UnitSystem> {
    lexer: Lexer<'a>,
    system: &'a S,
    handler: &'a Handler,
    current: Token,
    failure: Cell<Option<Failure>>,
}

impl<'a, S: UnitSystem> Parser<'a, S> {
    fn new(source: &'a str, system: &'a S, handler: &'a Handler) -> Self {
        let mut lexer = Lexer::new(source, handler);
        let current = lexer.next_token();
        Self {
            lexer,
            system,
            handler,
            current,
            failure: Cell::new(None),
        }
    }

    /// `spec := ε | shift` (§4.4), plus the "stray unopened `)`" quirk: a
    /// single trailing `)` left over after a complete `shift` is silently
    /// consumed rather than reported as trailing input. This is a known
    /// quirk of the grammar this crate's driver is grounded on (§4.4's
    /// disambiguation notes) and is preserved deliberately rather than
    /// tightened.
    fn parse_spec(&mut self) -> Option<Unit> {
        if self.at_eof() {
            return Some(self.system.dimensionless_one());
        }
        let unit = self.parse_shift()?;
        if self.current.kind == TokenKind::RParen {
            self.advance();
        }
        Some(unit)
    }

    fn at_eof(&self) -> bool {
        self.current.kind.is_eof()
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Used immediately after consuming a `SHIFT` token: the lexer needs
    /// to know whether the left-hand product is time-like before it can
    /// decide whether a following digit run is a packed timestamp.
    fn advance_after_shift(&mut self) {
        self.current = self.lexer.lex_after_shift();
    }

    /// Used immediately after consuming a `DATE` token.
    fn advance_after_date(&mut self) {
        self.current = self.lexer.lex_timestamp_continuation();
    }

    /// Used immediately after consuming a `CLOCK` token.
    fn advance_after_clock(&mut self) {
        self.current = self.lexer.lex_tz_continuation();
    }

    fn record_failure(&self, kind: Failure) {
        if self.failure.get().is_none() {
            self.failure.set(Some(kind));
        }
    }

    /// Reports an unexpected-token diagnostic at the current token's span
    /// and marks the parse as a `SYNTAX` failure.
    fn syntax_error(&mut self, message: impl Into<String>) {
        self.record_failure(Failure::Syntax);
        DiagnosticBuilder::error(message.into())
            .code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN)
            .span(self.current.span)
            .emit(self.handler);
    }

    /// Marks a `SYNTAX` failure for a token the lexer itself already
    /// reported (`TokenKind::Err`) — no second diagnostic is emitted, the
    /// lexer's own `report_error` already added one to `handler`.
    fn syntax_error_already_reported(&self) {
        self.record_failure(Failure::Syntax);
    }

    fn expect_rparen(&mut self) -> Option<()> {
        if self.current.kind == TokenKind::RParen {
            self.advance();
            Some(())
        } else {
            self.syntax_error(format!(
                "expected ')', found {}",
                self.current.kind.describe()
            ));
            None
        }
    }

    fn unknown_identifier(&mut self, text: &str, span: Span) {
        self.record_failure(Failure::UnknownIdentifier);
        DiagnosticBuilder::error(format!("Don't recognize \"{text}\""))
            .code(DiagnosticCode::E_PARSE_UNKNOWN_IDENTIFIER)
            .span(span)
            .emit(self.handler);
    }
}
