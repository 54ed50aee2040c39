//! Core lexer dispatch.
//!
//! Grounded on `faxc-lex/src/lexer/core.rs`'s `Lexer` struct and
//! `next_token` dispatch shape, generalized for §4.2's token vocabulary and
//! its context-sensitive positions.

use unitspec_util::{DiagnosticBuilder, Handler, Span};

use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode;

/// Lexer for a unit specification.
///
/// Owns its [`ParseContext`] (the time-context feedback bit, §9): the
/// parser reads and writes it through [`Lexer::expect_timestamp`] and
/// [`Lexer::set_time_context`] rather than through any process-global
/// state, so two parses never interfere even if run on the same thread in
/// sequence.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    handler: &'a Handler,
    context: ParseContext,

    pub(crate) token_start: usize,
    token_start_line: u32,
    token_start_column: u32,

    /// Whether the previous token produced was "value-like" (can be the
    /// left operand of a juxtaposition-multiply) — see
    /// [`Lexer::promote_space_to_multiply`].
    last_was_value: bool,

    /// Count of space characters skipped immediately before the token
    /// currently being produced; set by
    /// [`Lexer::skip_space_run_or_newline_error`], consumed by
    /// [`Lexer::promote_space_to_multiply`].
    space_run_len: usize,

    /// Set once `next_token` has produced [`TokenKind::Eof`], so the
    /// `Iterator` impl yields it exactly once rather than looping forever.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            context: ParseContext::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            last_was_value: false,
            space_run_len: 0,
            exhausted: false,
        }
    }

    /// The source string this lexer was built over, for diagnostics that
    /// need to slice out a trailing snippet (§7).
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Whether the most recently reduced product is convertible to
    /// seconds — the lexer consults this when deciding whether digits
    /// after a `SHIFT` are a packed date (§4.2.5, §9).
    pub fn expect_timestamp(&self) -> bool {
        self.context.time_context()
    }

    /// Called by the parser when a `product` reduces, recording whether it
    /// is time-like.
    pub fn set_time_context(&self, value: bool) {
        self.context.set_time_context(value);
    }

    /// The ordinary token-dispatch entry point, used everywhere except the
    /// handful of grammar positions that need a different lexing rule for
    /// their very next token (right after `SHIFT`, right after `DATE`,
    /// right after `CLOCK` — see `lexer/datetime.rs`).
    pub fn next_token(&mut self) -> Token {
        if let Some(err) = self.skip_space_run_or_newline_error() {
            return err;
        }

        self.start_token();
        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof);
        }

        if let Some(multiply) = self.promote_space_to_multiply() {
            return multiply;
        }

        let kind = self.dispatch();
        self.last_was_value = Self::is_value_like(&kind);
        self.make(kind)
    }

    /// Dispatches on the current character to the specialized lexing
    /// routine for its token family.
    fn dispatch(&mut self) -> TokenKind {
        match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            '@' => {
                self.cursor.advance();
                TokenKind::Shift
            }
            '/' => {
                self.cursor.advance();
                TokenKind::Divide
            }
            '\u{00B7}' => {
                self.cursor.advance();
                TokenKind::Multiply
            }
            '^' => self.lex_caret_exponent(),
            '*' => self.lex_star(),
            '-' => self.lex_hyphen(),
            '+' => self.lex_plus(),
            '.' => self.lex_dot(),
            c if unicode::is_superscript_digit(c) || unicode::superscript_sign(c).is_some() => {
                self.lex_superscript_exponent()
            }
            c if unicode::is_ident_start(c) => self.lex_identifier(),
            c if unicode::is_standalone_identifier(c) => self.lex_standalone_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.report_error(format!("unexpected character {c:?}"));
                self.cursor.advance();
                TokenKind::Err(format!("unexpected character {c:?}"))
            }
        }
    }

    /// §4.2.4: "a run of space characters between two non-operator
    /// tokens" is itself a `MULTIPLY` token. Called once whitespace has
    /// already been skipped and the token-start has been recorded at the
    /// first non-space character; if that skip consumed at least one space
    /// character, the previous token was value-like, and the character
    /// we're now looking at can itself start a value, the space run
    /// becomes the `MULTIPLY` token instead of being silently discarded.
    ///
    /// The same juxtaposition also applies with zero intervening spaces
    /// (`2nanosecond` is `2 · nanosecond`, SPEC_FULL.md §4.4): a value
    /// token directly followed by an identifier or `(` is promoted the
    /// same way. The one excluded zero-space case is a value directly
    /// followed by a digit (`m2`) — that digit was already split off by
    /// `lex_identifier`'s trailing-digit trim and belongs to `power :=
    /// basic INT`, not to a juxtaposed product.
    fn promote_space_to_multiply(&mut self) -> Option<Token> {
        if !self.last_was_value {
            return None;
        }
        if !self.at_value_start() {
            return None;
        }
        if self.space_run_len == 0 && self.cursor.current_char().is_ascii_digit() {
            return None;
        }
        self.last_was_value = false;
        Some(self.make(TokenKind::Multiply))
    }

    /// Whether the current character can begin a `basic` expression —
    /// used to decide if a preceding space run counts as juxtaposition.
    fn at_value_start(&self) -> bool {
        let c = self.cursor.current_char();
        if unicode::is_ident_start(c) || unicode::is_standalone_identifier(c) || c == '(' {
            return true;
        }
        if c.is_ascii_digit() {
            return true;
        }
        if (c == '+' || c == '-') && self.cursor.peek_char(1).is_ascii_digit() {
            return true;
        }
        false
    }

    fn is_value_like(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Int(_)
                | TokenKind::Real(_)
                | TokenKind::Ident(_)
                | TokenKind::RParen
                | TokenKind::Exponent(_)
                | TokenKind::Date(_)
                | TokenKind::Clock(_)
                | TokenKind::TzClock(_)
                | TokenKind::Z
                | TokenKind::Gmt
                | TokenKind::Utc
        )
    }

    /// Skips space characters (§4.2.1); returns `Some` with an error token
    /// if an embedded newline is found (the driver trims leading/trailing
    /// newlines, so one surviving here is necessarily embedded).
    fn skip_space_run_or_newline_error(&mut self) -> Option<Token> {
        let mut count = 0usize;
        loop {
            let c = self.cursor.current_char();
            if unicode::is_space(c) {
                self.cursor.advance();
                count += 1;
            } else if c == '\n' {
                self.start_token();
                self.cursor.advance();
                self.report_error("unexpected newline in unit specification".to_string());
                return Some(self.make(TokenKind::Err(
                    "unexpected newline in unit specification".to_string(),
                )));
            } else {
                break;
            }
        }
        self.space_run_len = count;
        None
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, span)
    }

    pub(crate) fn report_error(&self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }
}

/// Yields tokens until (and including) [`TokenKind::Eof`], then stops —
/// convenient for `.count()`-style benchmarking and for driver code that
/// wants to collect the whole stream up front.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.kind.is_eof() {
            self.exhausted = true;
        }
        Some(token)
    }
}
