//! Character classification tables.
//!
//! Unlike a general-purpose language lexer (which leans on `char::is_alphabetic`
//! and treats all Unicode whitespace as insignificant), a unit specification
//! has an exact, small alphabet: ASCII letters plus a fixed set of Latin-1
//! code points that double as identifier characters, and a narrow whitespace
//! definition that deliberately excludes the non-breaking space. These tables
//! are `once_cell::sync::Lazy` static lookups, following the perfect-hash /
//! static-table convention used by Unicode-aware unit parsers in the wider
//! ecosystem, sized small enough here that a `match` over ranges is simpler
//! than a hash table.

use once_cell::sync::Lazy;

/// Space characters per the spec's whitespace rule: `U+0020`, TAB, CR, FF, VT.
/// Newline is deliberately excluded — an embedded `LF` is a syntax error, not
/// a separator, and NBSP (`U+00A0`) is excluded because it is a letter.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, '\u{0020}' | '\u{0009}' | '\u{000D}' | '\u{000C}' | '\u{000B}')
}

/// Whitespace accepted only when *trimming* the driver's input buffer before
/// lexing starts — adds LF (which is a hard syntax error if it survives
/// inside the grammar) and, when the source was Latin-1, NBSP.
#[inline]
pub fn is_trim_space(c: char, was_latin1: bool) -> bool {
    is_space(c) || c == '\u{000A}' || (was_latin1 && c == '\u{00A0}')
}

/// The fixed Latin-1 letter-like set that counts as an identifier character
/// alongside ASCII letters: `U+00A0, U+00AD, U+00B0, U+00B5,
/// U+00C0-U+00D6, U+00D8-U+00F6, U+00F8-U+00FF`.
#[inline]
pub fn is_latin1_letter(c: char) -> bool {
    matches!(c,
        '\u{00A0}' | '\u{00AD}' | '\u{00B0}' | '\u{00B5}'
        | '\u{00C0}'..='\u{00D6}'
        | '\u{00D8}'..='\u{00F6}'
        | '\u{00F8}'..='\u{00FF}'
    )
}

#[inline]
fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// A character that can start an identifier: an ASCII letter/underscore, or
/// one of the Latin-1 letter-like code points.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    is_ascii_letter(c) || is_latin1_letter(c)
}

/// A character that can continue an identifier after its first: adds ASCII
/// digits to `is_ident_start` (multichar identifiers may contain digits but
/// never *end* on one — that rule is enforced by the identifier lexer, not
/// here, since it requires lookahead).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// The standalone single-character identifier tokens: `%`, `'`, `"`, `°`, `µ`.
/// These lex as a complete identifier on their own even though `°` and `µ`
/// also appear in [`is_latin1_letter`] (so `°C` and a lone `°` both work).
#[inline]
pub fn is_standalone_identifier(c: char) -> bool {
    matches!(c, '%' | '\'' | '"' | '\u{00B0}' | '\u{00B5}')
}

/// Superscript digits `⁰`-`⁹` mapped to their ASCII digit value.
static SUPERSCRIPT_DIGITS: Lazy<[(char, u8); 10]> = Lazy::new(|| {
    [
        ('\u{2070}', 0),
        ('\u{00B9}', 1),
        ('\u{00B2}', 2),
        ('\u{00B3}', 3),
        ('\u{2074}', 4),
        ('\u{2075}', 5),
        ('\u{2076}', 6),
        ('\u{2077}', 7),
        ('\u{2078}', 8),
        ('\u{2079}', 9),
    ]
});

#[inline]
pub fn superscript_digit(c: char) -> Option<u8> {
    SUPERSCRIPT_DIGITS.iter().find(|(ch, _)| *ch == c).map(|(_, d)| *d)
}

#[inline]
pub fn is_superscript_digit(c: char) -> bool {
    superscript_digit(c).is_some()
}

/// Superscript plus/minus: `⁺` (U+207A), `⁻` (U+207B).
#[inline]
pub fn superscript_sign(c: char) -> Option<i32> {
    match c {
        '\u{207A}' => Some(1),
        '\u{207B}' => Some(-1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_excludes_nbsp_and_newline() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(!is_space('\u{00A0}'));
        assert!(!is_space('\n'));
    }

    #[test]
    fn trim_space_includes_newline_and_conditionally_nbsp() {
        assert!(is_trim_space('\n', false));
        assert!(!is_trim_space('\u{00A0}', false));
        assert!(is_trim_space('\u{00A0}', true));
    }

    #[test]
    fn latin1_letter_set_matches_spec_ranges() {
        assert!(is_latin1_letter('\u{00A0}'));
        assert!(is_latin1_letter('\u{00AD}'));
        assert!(is_latin1_letter('\u{00B0}'));
        assert!(is_latin1_letter('\u{00B5}'));
        assert!(is_latin1_letter('\u{00C0}'));
        assert!(is_latin1_letter('\u{00D6}'));
        assert!(!is_latin1_letter('\u{00D7}')); // multiplication sign, excluded
        assert!(is_latin1_letter('\u{00D8}'));
        assert!(is_latin1_letter('\u{00F6}'));
        assert!(!is_latin1_letter('\u{00F7}')); // division sign, excluded
        assert!(is_latin1_letter('\u{00F8}'));
        assert!(is_latin1_letter('\u{00FF}'));
        assert!(!is_latin1_letter('A'));
    }

    #[test]
    fn ident_start_and_continue() {
        assert!(is_ident_start('k'));
        assert!(is_ident_start('_'));
        assert!(is_ident_start('µ'));
        assert!(!is_ident_start('5'));
        assert!(is_ident_continue('5'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn standalone_identifiers() {
        assert!(is_standalone_identifier('%'));
        assert!(is_standalone_identifier('\''));
        assert!(is_standalone_identifier('"'));
        assert!(is_standalone_identifier('°'));
        assert!(is_standalone_identifier('µ'));
        assert!(!is_standalone_identifier('k'));
    }

    #[test]
    fn superscript_digits_map_correctly() {
        assert_eq!(superscript_digit('⁰'), Some(0));
        assert_eq!(superscript_digit('¹'), Some(1));
        assert_eq!(superscript_digit('²'), Some(2));
        assert_eq!(superscript_digit('³'), Some(3));
        assert_eq!(superscript_digit('⁹'), Some(9));
        assert_eq!(superscript_digit('x'), None);
    }

    #[test]
    fn superscript_signs() {
        assert_eq!(superscript_sign('⁺'), Some(1));
        assert_eq!(superscript_sign('⁻'), Some(-1));
        assert_eq!(superscript_sign('+'), None);
    }
}
