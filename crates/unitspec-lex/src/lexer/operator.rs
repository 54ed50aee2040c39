//! Operator lexing: `-`, `+`, `.`, `*`/`**`, `^`, and superscript exponents
//! (§4.2.4).
//!
//! Unlike `faxc-lex/src/lexer/operator.rs`, which lexes a fixed operator
//! alphabet (`+`, `+=`, `&&`, ...) with no ambiguity against any other token
//! family, every operator character here can also open a number (a leading
//! sign) or, in the case of `-`, stand for juxtaposition-multiply. The
//! dispatch below resolves that purely by looking at the next character,
//! mirroring the grammar's own `power := basic INT` vs `product := product
//! power` ambiguity.

use crate::token::TokenKind;
use crate::unicode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// `-` is MULTIPLY when followed by something that cannot start a
    /// signed number (§4.2.4: `kg-m`), and the sign of a number otherwise
    /// (`s-2`, `-5`).
    pub fn lex_hyphen(&mut self) -> TokenKind {
        let next = self.cursor.peek_char(1);
        if next.is_ascii_digit() || next == '.' {
            self.lex_number()
        } else {
            self.cursor.advance();
            TokenKind::Multiply
        }
    }

    /// `+` is only ever a number sign (`+5`); there is no `+`-as-multiply
    /// form in §4.2.4, so anything else following it is an error raised by
    /// [`Lexer::lex_number`] itself.
    pub fn lex_plus(&mut self) -> TokenKind {
        self.lex_number()
    }

    /// `.` is MULTIPLY (§4.2.4's plain `.` form) unless immediately
    /// followed by a digit, in which case it is the leading dot of a real
    /// literal (`.5`).
    pub fn lex_dot(&mut self) -> TokenKind {
        if self.cursor.peek_char(1).is_ascii_digit() {
            self.lex_number()
        } else {
            self.cursor.advance();
            TokenKind::Multiply
        }
    }

    /// `*` is MULTIPLY; `**` folds straight into an exponent so that
    /// `m**-2` lexes the same as `m^-2`.
    pub fn lex_star(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            self.lex_signed_exponent_digits()
        } else {
            TokenKind::Multiply
        }
    }

    /// `^N`: the exponent always follows immediately, never with an
    /// intervening space.
    pub fn lex_caret_exponent(&mut self) -> TokenKind {
        self.cursor.advance();
        self.lex_signed_exponent_digits()
    }

    fn lex_signed_exponent_digits(&mut self) -> TokenKind {
        let negative = self.cursor.match_char('-');
        if !negative {
            self.cursor.match_char('+');
        }
        let digits_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.position() == digits_start {
            return TokenKind::Err("exponent operator must be followed by digits".to_string());
        }
        let text = self.cursor.slice_from(digits_start);
        match text.parse::<i32>() {
            Ok(value) => TokenKind::Exponent(if negative { -value } else { value }),
            Err(_) => TokenKind::Err(format!("exponent {text:?} out of range")),
        }
    }

    /// A run of superscript digits, optionally preceded by a superscript
    /// sign (`⁻²`, `³`), folds to the same [`TokenKind::Exponent`] an
    /// ASCII `^2` would produce.
    pub fn lex_superscript_exponent(&mut self) -> TokenKind {
        let sign = unicode::superscript_sign(self.cursor.current_char());
        if sign.is_some() {
            self.cursor.advance();
        }
        let digits_start = self.cursor.position();
        let mut value: i32 = 0;
        while let Some(digit) = unicode::superscript_digit(self.cursor.current_char()) {
            value = value * 10 + digit as i32;
            self.cursor.advance();
        }
        if self.cursor.position() == digits_start {
            return TokenKind::Err("superscript sign must be followed by superscript digits".to_string());
        }
        TokenKind::Exponent(value * sign.unwrap_or(1))
    }
}
