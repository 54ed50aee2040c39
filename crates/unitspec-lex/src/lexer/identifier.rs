//! Identifier lexing, word-operator recognition, and the logarithmic-prefix
//! lookahead (§4.2.3, §4.2.4 word forms, §4.2.6).

use crate::token::TokenKind;
use crate::unicode;
use crate::Lexer;
use unitspec_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes an identifier starting at the cursor, which the caller has
    /// already confirmed begins with [`unicode::is_ident_start`].
    ///
    /// Handles the trailing-digit trim (§4.2.3: a multichar identifier
    /// cannot end in a digit — trailing digits belong to an exponent),
    /// the `nan`/`inf`/`infinity` rejection, the `after|from|since|ref|per`
    /// word-operator forms, and the `log|lg|ln|lb` logarithmic-reference
    /// lookahead.
    pub fn lex_identifier(&mut self) -> TokenKind {
        while unicode::is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let full_text = self.cursor.slice_from(self.token_start);
        let trimmed_len = full_text.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        if trimmed_len < full_text.len() {
            self.cursor.rewind_ascii(full_text.len() - trimmed_len);
        }

        let text = self.cursor.slice_from(self.token_start);

        if is_forbidden_literal(text) {
            return TokenKind::Err(format!("\"{text}\": NaN/Inf/Infinity not allowed"));
        }

        if text.eq_ignore_ascii_case("after")
            || text.eq_ignore_ascii_case("from")
            || text.eq_ignore_ascii_case("since")
            || text.eq_ignore_ascii_case("ref")
        {
            return TokenKind::Shift;
        }

        if text.eq_ignore_ascii_case("per") && self.word_operator_delimited() {
            return TokenKind::Divide;
        }

        if text.eq_ignore_ascii_case("z") {
            return TokenKind::Z;
        }
        if text.eq_ignore_ascii_case("gmt") {
            return TokenKind::Gmt;
        }
        if text.eq_ignore_ascii_case("utc") {
            return TokenKind::Utc;
        }

        if let Some(base) = logref_base(text) {
            if let Some(logref) = self.try_lex_logref(base) {
                return logref;
            }
        }

        TokenKind::Ident(Symbol::intern(text))
    }

    /// Lexes one of the standalone single-character identifiers `%`, `'`,
    /// `"` — unlike `°`/`µ` (which double as ordinary Latin-1 letters and so
    /// already flow through [`Lexer::lex_identifier`]), these never combine
    /// with a following character.
    pub fn lex_standalone_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        let text = self.cursor.slice_from(self.token_start);
        TokenKind::Ident(Symbol::intern(text))
    }

    /// True when the `per` just scanned has an ASCII space (not any
    /// whitespace — §4.2.4 is specific about this) immediately before and
    /// after it, the condition under which it is division rather than a
    /// plain identifier.
    fn word_operator_delimited(&self) -> bool {
        let source = self.cursor.source();
        let before_ok = self.token_start == 0 || source.as_bytes()[self.token_start - 1] == b' ';
        let end = self.cursor.position();
        let after_ok = end >= source.len() || source.as_bytes()[end] == b' ';
        before_ok && after_ok
    }
}

fn is_forbidden_literal(text: &str) -> bool {
    text.eq_ignore_ascii_case("nan") || text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("infinity")
}

/// The numeric base for a `log`-family word, per §4.2.6: `log`/`lg`→10,
/// `ln`→e, `lb`→2.
fn logref_base(text: &str) -> Option<f64> {
    if text.eq_ignore_ascii_case("log") || text.eq_ignore_ascii_case("lg") {
        Some(10.0)
    } else if text.eq_ignore_ascii_case("ln") {
        Some(std::f64::consts::E)
    } else if text.eq_ignore_ascii_case("lb") {
        Some(2.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitspec_util::Handler;

    fn lex_one(source: &str) -> TokenKind {
        let handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &handler);
        lexer.next_token().kind
    }

    #[test]
    fn simple_identifier() {
        assert_eq!(lex_one("kilogram"), TokenKind::Ident(Symbol::intern("kilogram")));
    }

    #[test]
    fn identifier_cannot_end_in_digit() {
        // "m2" lexes as Ident("m"); the "2" is left for the parser's power
        // rule to pick up as an EXPONENT/INT.
        assert_eq!(lex_one("m2"), TokenKind::Ident(Symbol::intern("m")));
    }

    #[test]
    fn digit_in_middle_of_identifier_stays() {
        assert_eq!(lex_one("m2s"), TokenKind::Ident(Symbol::intern("m2s")));
    }

    #[test]
    fn shift_words_case_insensitive() {
        for word in ["after", "FROM", "Since", "REF"] {
            assert_eq!(lex_one(word), TokenKind::Shift, "{word} should lex as Shift");
        }
    }

    #[test]
    fn per_requires_ascii_space_both_sides() {
        assert_eq!(lex_one(" per "), TokenKind::Divide);
    }

    #[test]
    fn per_glued_to_a_word_is_plain_identifier() {
        assert_eq!(lex_one("mPer"), TokenKind::Ident(Symbol::intern("mPer")));
    }

    #[test]
    fn nan_unsigned_is_forbidden() {
        match lex_one("NaN") {
            TokenKind::Err(msg) => assert!(msg.contains("not allowed")),
            other => panic!("expected Err, got {other:?}"),
        }
    }

    #[test]
    fn utc_markers() {
        assert_eq!(lex_one("Z"), TokenKind::Z);
        assert_eq!(lex_one("GMT"), TokenKind::Gmt);
        assert_eq!(lex_one("UTC"), TokenKind::Utc);
    }

    #[test]
    fn standalone_percent_and_degree() {
        assert_eq!(lex_one("%"), TokenKind::Ident(Symbol::intern("%")));
        assert_eq!(lex_one("\u{00B0}"), TokenKind::Ident(Symbol::intern("\u{00B0}")));
    }

    #[test]
    fn micro_combines_with_following_letters() {
        assert_eq!(lex_one("\u{00B5}s"), TokenKind::Ident(Symbol::intern("\u{00B5}s")));
    }

    #[test]
    fn plain_log_without_reference_is_an_identifier() {
        assert_eq!(lex_one("logarithm"), TokenKind::Ident(Symbol::intern("logarithm")));
    }

    #[test]
    fn logref_opens_with_parenthesized_re() {
        assert_eq!(lex_one("lg(re:"), TokenKind::LogRef(10.0));
    }

    #[test]
    fn logref_allows_space_before_open_paren() {
        assert_eq!(lex_one("lg (re 1 mW)"), TokenKind::LogRef(10.0));
    }

    #[test]
    fn logref_allows_space_before_re() {
        assert_eq!(lex_one("lg( re 1 mW)"), TokenKind::LogRef(10.0));
    }

    #[test]
    fn logref_allows_space_both_before_paren_and_before_re() {
        assert_eq!(lex_one("ln ( re 1 mW)"), TokenKind::LogRef(std::f64::consts::E));
    }

    #[test]
    fn plain_parenthesized_product_after_log_word_is_not_a_logref() {
        assert_eq!(lex_one("log(2)"), TokenKind::Ident(Symbol::intern("log")));
    }
}
