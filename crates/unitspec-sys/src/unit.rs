//! The value type every algebraic primitive in [`crate::UnitSystem`]
//! produces and consumes (§6).
//!
//! A fully worked-out unit needs more than a dimension vector: an offset
//! unit (celsius) and a time-origin unit (a timestamp shift) both carry a
//! scale and dimension identical to their base unit, but differ in what
//! gets added before a value crosses the wire to another unit. Rather than
//! one flag per distinct shift kind, `offset` and `time_origin` are kept as
//! separate fields so `scale`/`multiply`/`divide`/`raise` can all zero them
//! uniformly — an offset unit raised to a power, or multiplied by another
//! unit, isn't meaningful, and the reference implementation simply drops
//! the shift rather than rejecting the operation outright (the grammar
//! never actually calls `raise`/`multiply` on an already-offset unit — the
//! only place `offset`/`offset_by_time` appear is the top-level `shift`
//! production, §4.4).

use crate::Dimension;

/// A fully resolved unit: a scale factor and dimension, plus the optional
/// additive shift (`offset`) or time origin (`offset_by_time`) applied at
/// the top of a `shift` production, plus an optional logarithmic wrapping
/// (`lg(re ...)`, §4.2.6).
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Multiplicative factor relative to the system's base units.
    pub factor: f64,
    pub dimension: Dimension,
    /// Additive offset from `offset(u, real)` — e.g. celsius is kelvin
    /// with `offset == 273.15`.
    pub offset: f64,
    /// Seconds-since-epoch origin from `offset_by_time(u, seconds)` — set
    /// when a `product` is shifted by a `timestamp` rather than a plain
    /// number.
    pub time_origin: Option<f64>,
    /// Set by `log(base, reference)`; present only for units built through
    /// the `LOGREF` production.
    pub log: Option<Box<LogUnit>>,
}

/// The payload of a logarithmic unit: the base of the logarithm and the
/// reference quantity the logarithm is taken relative to (`lg(re 1 mW)`
/// is base 10, reference `1 mW`).
#[derive(Clone, Debug, PartialEq)]
pub struct LogUnit {
    pub base: f64,
    pub reference: Unit,
}

impl Unit {
    /// A bare scale-and-dimension unit with no shift or log wrapping.
    pub fn new(factor: f64, dimension: Dimension) -> Self {
        Self {
            factor,
            dimension,
            offset: 0.0,
            time_origin: None,
            log: None,
        }
    }

    pub fn dimensionless(factor: f64) -> Self {
        Self::new(factor, Dimension::DIMENSIONLESS)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_shift_or_log() {
        let u = Unit::new(2.0, Dimension::LENGTH);
        assert_eq!(u.offset, 0.0);
        assert!(u.time_origin.is_none());
        assert!(u.log.is_none());
    }

    #[test]
    fn dimensionless_constructor_carries_factor_only() {
        let u = Unit::dimensionless(5.0);
        assert!(u.is_dimensionless());
        assert_eq!(u.factor, 5.0);
    }
}
