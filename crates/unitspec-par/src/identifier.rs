//! Identifier resolution (§4.3): the iterative prefix-peeling algorithm
//! that turns a lexeme like `"kilometer"` or `"mmHg"` into a unit when
//! there's no single catalog entry for the whole string.
//!
//! The loop tries, in order: (1) a full unit-name match, (2) a full
//! unit-symbol match, (3) peeling one known prefix *name* off the front,
//! scaling a running multiplier, and rechecking (1)/(2) against what's
//! left — repeating as long as a prefix name keeps matching and nothing
//! resolves — and finally (4) peeling at most one prefix *symbol* and
//! checking the remainder as a symbol. Resolution fails (`UNKNOWN`, §7)
//! once (3) can peel no further prefix name and (4) doesn't resolve
//! either.

use unitspec_sys::{Unit, UnitSystem};
use unitspec_util::Span;

use crate::Parser;

impl<'a, S: UnitSystem> Parser<'a, S> {
    pub(crate) fn resolve_identifier(&mut self, text: &str, span: Span) -> Option<Unit> {
        if let Some(unit) = self.system.get_unit_by_name(text) {
            return Some(unit);
        }
        if let Some(unit) = self.system.get_unit_by_symbol(text) {
            return Some(unit);
        }

        let mut scalar = 1.0;
        let mut remainder = text;

        loop {
            let Some((factor, consumed)) = self.system.get_prefix_by_name(remainder) else {
                break;
            };
            if consumed == 0 || consumed > remainder.len() {
                break;
            }
            scalar *= factor;
            remainder = &remainder[consumed..];
            if remainder.is_empty() {
                break;
            }
            if let Some(unit) = self.system.get_unit_by_name(remainder) {
                return Some(self.system.scale(scalar, &unit));
            }
            if let Some(unit) = self.system.get_unit_by_symbol(remainder) {
                return Some(self.system.scale(scalar, &unit));
            }
        }

        if !remainder.is_empty() {
            if let Some((factor, consumed)) = self.system.get_prefix_by_symbol(remainder) {
                if consumed > 0 && consumed <= remainder.len() {
                    let tail = &remainder[consumed..];
                    if !tail.is_empty() {
                        if let Some(unit) = self.system.get_unit_by_symbol(tail) {
                            return Some(self.system.scale(scalar * factor, &unit));
                        }
                    }
                }
            }
        }

        self.unknown_identifier(text, span);
        None
    }
}
