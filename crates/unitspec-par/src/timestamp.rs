//! `timestamp := DATE | DATE CLOCK | DATE CLOCK TZ_CLOCK
//! | DATE CLOCK (Z|GMT|UTC) | DATE Z` (§4.4).
//!
//! Entered from [`crate::Parser::parse_shift`] once the lexer has produced
//! a `DATE` token right after `SHIFT`. Each token read here comes from one
//! of the lexer's dedicated continuation entry points rather than
//! `next_token`, since only the position right after `DATE`/`CLOCK` needs
//! the specialized clock/timezone lexing rules.

use unitspec_lex::TokenKind;
use unitspec_sys::UnitSystem;

use crate::Parser;

impl<'a, S: UnitSystem> Parser<'a, S> {
    /// Returns the timestamp as seconds since the epoch. Assumes
    /// `self.current.kind` is `TokenKind::Date(_)` on entry.
    pub(crate) fn parse_timestamp(&mut self) -> Option<f64> {
        let date = match self.current.kind {
            TokenKind::Date(seconds) => seconds,
            _ => unreachable!("parse_timestamp called without a Date token current"),
        };
        self.advance_after_date();

        let clock = match self.current.kind {
            TokenKind::Clock(seconds) => seconds,
            TokenKind::Z => {
                self.advance();
                return Some(date);
            }
            _ => return Some(date),
        };
        self.advance_after_clock();

        match self.current.kind {
            // DATE + (CLOCK - TZ_CLOCK): the clock reads local time at the
            // given offset, so converting to UTC subtracts the offset.
            TokenKind::TzClock(tz_offset) => {
                self.advance();
                Some(date + (clock - tz_offset))
            }
            TokenKind::Z | TokenKind::Gmt | TokenKind::Utc => {
                self.advance();
                Some(date + clock)
            }
            _ => Some(date + clock),
        }
    }
}
