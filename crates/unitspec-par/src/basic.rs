//! `basic := ID | '(' shift ')' | LOGREF product ')' | number` (§4.4).

use unitspec_lex::TokenKind;
use unitspec_sys::{Unit, UnitSystem};

use crate::Parser;

impl<'a, S: UnitSystem> Parser<'a, S> {
    pub(crate) fn parse_basic(&mut self) -> Option<Unit> {
        match self.current.kind.clone() {
            TokenKind::Ident(symbol) => {
                let span = self.current.span;
                self.advance();
                self.resolve_identifier(symbol.as_str(), span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_shift()?;
                self.expect_rparen()?;
                Some(inner)
            }
            TokenKind::LogRef(base) => {
                self.advance();
                let reference = self.parse_product()?;
                self.expect_rparen()?;
                Some(self.system.log(base, &reference))
            }
            TokenKind::Int(n) => {
                self.advance();
                Some(self.system.scale(n as f64, &self.system.dimensionless_one()))
            }
            TokenKind::Real(n) => {
                self.advance();
                Some(self.system.scale(n, &self.system.dimensionless_one()))
            }
            TokenKind::Err(_) => {
                self.syntax_error_already_reported();
                None
            }
            other => {
                self.syntax_error(format!(
                    "expected a unit, number, or '(', found {}",
                    other.describe()
                ));
                None
            }
        }
    }
}
