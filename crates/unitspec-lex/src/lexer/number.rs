//! Integer and real literal lexing (§4.2.2).

use crate::token::TokenKind;
use crate::Lexer;

const FORBIDDEN_LITERALS: &[&str] = &["nan", "inf", "infinity"];

impl<'a> Lexer<'a> {
    /// Lexes a number starting at the cursor: an optional sign, then either
    /// an integer or a real (`d+.`, `.d+`, `d+.d+`, each with an optional
    /// `[eE][+-]?d+` exponent).
    ///
    /// Also catches `NaN`/`Inf`/`Infinity` (any case) written where a number
    /// is expected, rejecting them per §4.2.2 before any digit scanning
    /// begins.
    pub fn lex_number(&mut self) -> TokenKind {
        let start = self.token_start;
        let negative = self.cursor.match_char('-');
        if !negative {
            self.cursor.match_char('+');
        }

        if let Some(forbidden) = self.peek_forbidden_literal() {
            self.cursor.advance_n(forbidden.chars().count());
            return self.forbidden_literal_error(start);
        }

        let int_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let has_int_digits = self.cursor.position() > int_start;

        let mut is_real = false;
        if self.cursor.current_char() == '.' {
            let frac_start = self.cursor.position();
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let has_frac_digits = self.cursor.position() > frac_start + 1;
            if !has_int_digits && !has_frac_digits {
                // bare '.' with no digits on either side: not a number at all.
                return TokenKind::Err(format!(
                    "invalid numeric literal {:?}",
                    self.cursor.slice_from(start)
                ));
            }
            is_real = true;
        } else if !has_int_digits {
            return TokenKind::Err(format!(
                "invalid numeric literal {:?}",
                self.cursor.slice_from(start)
            ));
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let exp_snapshot = self.cursor.snapshot();
            self.cursor.advance();
            if !self.cursor.match_char('-') {
                self.cursor.match_char('+');
            }
            let exp_digits_start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            if self.cursor.position() == exp_digits_start {
                self.cursor.restore(exp_snapshot);
            } else {
                is_real = true;
            }
        }

        let text = self.cursor.slice_from(start);
        if is_real {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => TokenKind::Real(value),
                _ => TokenKind::Err(format!("invalid real literal {:?}", text)),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => TokenKind::Int(value),
                Err(_) => TokenKind::Err(format!("integer literal {:?} out of range", text)),
            }
        }
    }

    fn peek_forbidden_literal(&self) -> Option<&'static str> {
        let remaining = self.cursor.remaining();
        FORBIDDEN_LITERALS
            .iter()
            .copied()
            .find(|candidate| remaining.len() >= candidate.len() && remaining[..candidate.len()].eq_ignore_ascii_case(candidate))
    }

    fn forbidden_literal_error(&self, start: usize) -> TokenKind {
        let text = self.cursor.slice_from(start);
        TokenKind::Err(format!("\"{text}\": NaN/Inf/Infinity not allowed"))
    }
}
