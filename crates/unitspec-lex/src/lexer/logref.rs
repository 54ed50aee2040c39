//! Logarithmic-reference token lookahead (§4.2.6).
//!
//! `lg(re 1 mW)` lexes `lg(re` as a single [`TokenKind::LogRef`] token
//! carrying the log base, with the `1 mW` reference value and trailing `)`
//! left for the parser to consume as an ordinary `basic` expression. The
//! lookahead is speculative: `self.cursor.current_char() == '('` does not
//! guarantee a `re` follows (`log(2)` is a plain parenthesized product), so
//! a failed attempt must roll the cursor all the way back.
//!
//! The lexeme is `<log> <sp>* ( <sp>* re [:]? <sp>*` — space runs are
//! permitted both before the `(` and before `re`, so `lg (re 1 mW)` and
//! `lg( re 1 mW)` are both valid.

use crate::token::TokenKind;
use crate::unicode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Called once identifier lexing has matched one of `log`/`lg`/`ln`/`lb`
    /// and resolved `base`. Returns `None`
    /// (with the cursor untouched) if what follows isn't `(re` — the
    /// caller then falls back to treating the matched word as a plain
    /// identifier.
    pub(crate) fn try_lex_logref(&mut self, base: f64) -> Option<TokenKind> {
        let snapshot = self.cursor.snapshot();

        self.skip_space_run();
        if self.cursor.current_char() != '(' {
            self.cursor.restore(snapshot);
            return None;
        }
        self.cursor.advance();

        self.skip_space_run();
        if self.cursor.current_char() != 'r' && self.cursor.current_char() != 'R' {
            self.cursor.restore(snapshot);
            return None;
        }
        self.cursor.advance();
        if self.cursor.current_char() != 'e' && self.cursor.current_char() != 'E' {
            self.cursor.restore(snapshot);
            return None;
        }
        self.cursor.advance();

        // An optional ':' directly after 're' is part of some corpora's
        // spelling ("re:") and is swallowed here so the parser never sees it.
        self.cursor.match_char(':');

        Some(TokenKind::LogRef(base))
    }

    /// Skips a run of §4.2.1 space characters (not a newline — those don't
    /// belong inside this lexeme's lookahead).
    fn skip_space_run(&mut self) {
        while unicode::is_space(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}
