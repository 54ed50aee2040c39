//! `product := power | product power | product MULTIPLY power
//! | product DIVIDE power` and `power := basic | basic INT | basic EXPONENT`
//! (§4.4).
//!
//! Juxtaposition (`kg m` meaning `kg*m`, and `2nanosecond` meaning
//! `2*nanosecond` with zero intervening space) never reaches this level as
//! a distinct case: `unitspec-lex` already folds both a space run and a
//! bare value-to-value boundary between two value-like tokens into an
//! explicit [`TokenKind::Multiply`] (`promote_space_to_multiply`), so
//! `product` only ever needs to handle the one explicit-operator loop.

use unitspec_lex::TokenKind;
use unitspec_sys::{Unit, UnitSystem};

use crate::Parser;

impl<'a, S: UnitSystem> Parser<'a, S> {
    pub(crate) fn parse_product(&mut self) -> Option<Unit> {
        let mut left = self.parse_power()?;
        loop {
            match self.current.kind {
                TokenKind::Multiply => {
                    self.advance();
                    let right = self.parse_power()?;
                    left = self.system.multiply(&left, &right);
                }
                TokenKind::Divide => {
                    self.advance();
                    let right = self.parse_power()?;
                    left = self.system.divide(&left, &right);
                }
                _ => break,
            }
        }
        Some(left)
    }

    pub(crate) fn parse_power(&mut self) -> Option<Unit> {
        let basic = self.parse_basic()?;
        match self.current.kind.clone() {
            TokenKind::Int(n) => {
                self.advance();
                Some(self.system.raise(&basic, n as i32))
            }
            TokenKind::Exponent(n) => {
                self.advance();
                Some(self.system.raise(&basic, n))
            }
            _ => Some(basic),
        }
    }
}
