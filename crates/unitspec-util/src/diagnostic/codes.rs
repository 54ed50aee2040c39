//! Diagnostic codes for categorizing lexer/parser/driver failures.
//!
//! Codes follow `{prefix}{number}`, `prefix` is `"E"` for every code this
//! crate defines (the core has no warnings of its own — see
//! `DESIGN.md` on the `Level::Warning` variant being kept only for API
//! symmetry with the teacher's diagnostic module).

/// A unique code identifying a diagnostic message.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Lexer: a byte/character does not start any valid token.
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// Lexer: a numeric literal could not be parsed (bad exponent, etc).
    pub const E_LEX_INVALID_NUMBER: Self = Self::new("E", 1002);
    /// Lexer: `nan`/`inf`/`infinity` literal, forbidden by §4.2.2.
    pub const E_LEX_FORBIDDEN_LITERAL: Self = Self::new("E", 1003);
    /// Lexer: a date field (year/month/day) is out of range.
    pub const E_LEX_INVALID_DATE: Self = Self::new("E", 1004);
    /// Lexer: a clock field (hour/minute/second) is out of range.
    pub const E_LEX_INVALID_CLOCK: Self = Self::new("E", 1005);
    /// Lexer: a timezone offset is out of range or is the forbidden `-00:00`.
    pub const E_LEX_INVALID_TIMEZONE: Self = Self::new("E", 1006);

    /// Parser: a production could not match the current token.
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// Parser: input remained after a complete `spec` reduced (§4.4 residue).
    pub const E_PARSE_TRAILING_INPUT: Self = Self::new("E", 2002);
    /// Parser: identifier resolution (§4.3) exhausted all prefix peels.
    pub const E_PARSE_UNKNOWN_IDENTIFIER: Self = Self::new("E", 2003);

    /// Driver: null/empty system or string argument.
    pub const E_DRIVER_BAD_ARG: Self = Self::new("E", 3001);
    /// Driver: allocation or transcoding failure.
    pub const E_DRIVER_OS: Self = Self::new("E", 3002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
