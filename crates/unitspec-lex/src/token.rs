//! The token stream vocabulary (§3).

use unitspec_util::{Span, Symbol};

/// A lexical token with its semantic value, as produced by [`crate::Lexer`].
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Signed integer literal.
    Int(i64),
    /// Signed real literal; always finite (`NaN`/`Inf` are rejected at the
    /// lexer, see [`TokenKind::Err`]).
    Real(f64),
    /// An identifier; the interned exact lexeme.
    Ident(Symbol),
    /// Any of `@`, `after`, `from`, `since`, `ref`.
    Shift,
    /// Any of `-`, `.`, `*`, `·`, or a run of spaces between two non-operator
    /// tokens.
    Multiply,
    /// `/`, or `per`/`PER` surrounded by required ASCII space.
    Divide,
    /// `^N`, `**N`, or a superscript digit run, already folded to its value.
    Exponent(i32),
    /// Broken or packed date, in seconds since the epoch convention used by
    /// the unit system's `offset_by_time`.
    Date(f64),
    /// Broken or packed clock, in seconds since midnight (no timezone
    /// applied yet).
    Clock(f64),
    /// Signed timezone offset in seconds, East positive.
    TzClock(f64),
    /// The literal `Z` UTC marker.
    Z,
    /// The literal `GMT` UTC marker.
    Gmt,
    /// The literal `UTC` UTC marker.
    Utc,
    /// The numeric base of a `<log>(re[:]` construct (10, e, or 2).
    LogRef(f64),
    LParen,
    RParen,
    /// A lexer-side diagnostic; payload is the user-facing explanation
    /// (§4.2.7). Carried as a token so the parser can transport it to the
    /// reporter without a separate out-of-band channel.
    Err(String),
    /// End of input.
    Eof,
}

impl TokenKind {
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    pub fn is_err(&self) -> bool {
        matches!(self, TokenKind::Err(_))
    }

    /// A short, human-readable name for this variant, used in "unexpected
    /// token" diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Real(_) => "real number",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Shift => "shift operator",
            TokenKind::Multiply => "multiplication operator",
            TokenKind::Divide => "division operator",
            TokenKind::Exponent(_) => "exponent",
            TokenKind::Date(_) => "date",
            TokenKind::Clock(_) => "clock",
            TokenKind::TzClock(_) => "timezone offset",
            TokenKind::Z => "'Z'",
            TokenKind::Gmt => "'GMT'",
            TokenKind::Utc => "'UTC'",
            TokenKind::LogRef(_) => "logarithmic reference",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Err(_) => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token together with the span of source it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_are_stable() {
        assert_eq!(TokenKind::Int(1).describe(), "integer");
        assert_eq!(TokenKind::Eof.describe(), "end of input");
    }

    #[test]
    fn is_eof_and_is_err() {
        assert!(TokenKind::Eof.is_eof());
        assert!(TokenKind::Err("bad".into()).is_err());
        assert!(!TokenKind::Int(1).is_err());
    }
}
