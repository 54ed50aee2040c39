//! `shift := product | product SHIFT (REAL | INT) | product SHIFT timestamp`
//! (§4.4), the entry point into the grammar from [`crate::Parser::parse_spec`].

use unitspec_lex::TokenKind;
use unitspec_sys::{Unit, UnitSystem};

use crate::Parser;

impl<'a, S: UnitSystem> Parser<'a, S> {
    pub(crate) fn parse_shift(&mut self) -> Option<Unit> {
        let product = self.parse_product()?;

        if self.current.kind != TokenKind::Shift {
            return Some(product);
        }

        // The lexer needs to know, before it lexes what follows `SHIFT`,
        // whether a bare digit run there should be read as a packed
        // timestamp — only sensible when the left-hand side is itself
        // time-like (§4.2.5, §9).
        let time_like = self.is_time_like(&product);
        self.lexer.set_time_context(time_like);
        self.advance_after_shift();

        match self.current.kind.clone() {
            TokenKind::Int(n) => {
                self.advance();
                Some(self.system.offset(&product, n as f64))
            }
            TokenKind::Real(n) => {
                self.advance();
                Some(self.system.offset(&product, n))
            }
            TokenKind::Date(_) => {
                let seconds = self.parse_timestamp()?;
                Some(self.system.offset_by_time(&product, seconds))
            }
            TokenKind::Err(_) => {
                self.syntax_error_already_reported();
                None
            }
            _ => {
                self.syntax_error(format!(
                    "expected a number or timestamp after the shift operator, found {}",
                    self.current.kind.describe()
                ));
                None
            }
        }
    }

    /// Whether `unit` is convertible to seconds, i.e. whether a digit run
    /// right after `SHIFT` should be read as a packed date rather than a
    /// plain offset. Looks up "seconds" by symbol first, then by name;
    /// if the catalog exposes neither, the answer defaults to `false`
    /// rather than guessing (§9's resolution of the "no second unit
    /// known" open question).
    fn is_time_like(&self, unit: &Unit) -> bool {
        let seconds = self
            .system
            .get_unit_by_symbol("s")
            .or_else(|| self.system.get_unit_by_name("second"));
        match seconds {
            Some(seconds) => self.system.are_convertible(unit, &seconds),
            None => false,
        }
    }
}
