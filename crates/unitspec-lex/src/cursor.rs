//! Character cursor for traversing a unit-specification string.
//!
//! The cursor walks the UTF-8 string produced by [`crate::transcode`] (or a
//! caller-supplied UTF-8 string directly). It tracks byte position plus
//! 1-based line/column for diagnostics, same as any other source cursor, but
//! unlike a general-purpose language lexer it does *not* treat all Unicode
//! whitespace as insignificant — whitespace-ness here follows §4.2.1's exact
//! rule, applied by the caller via [`crate::unicode::is_space`], not by the
//! cursor itself.

/// A cursor for traversing a unit-specification string character by
/// character.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the cursor, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// The character `offset` bytes ahead of the cursor, or `'\0'` past the
    /// end.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advance one character, updating line/column tracking.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consume the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The substring from `start` (a byte offset previously read from
    /// [`Cursor::position`]) up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind to a previously taken snapshot. Used by the lexer when a
    /// tentative scan (e.g. trying a packed date before falling back to a
    /// plain number) fails and the input must be re-read.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Rewind by `n` bytes, where the rewound span is known to be single-byte
    /// ASCII with no embedded newline — used to un-consume trailing digits
    /// from an identifier (§4.2.3: multichar identifiers cannot end in a
    /// digit, so the lexer backs off over them once it sees the run ends).
    pub fn rewind_ascii(&mut self, n: usize) {
        self.position -= n;
        self.column -= n as u32;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}
