//! The `UnitSystem` collaborator interface (§6).
//!
//! The core driver/parser never touches a concrete unit catalog directly —
//! every lookup and every algebraic step goes through this trait. Only the
//! four lookup methods are genuinely catalog-specific (they depend on what
//! units and prefixes a system actually knows about); `scale`/`multiply`/
//! `divide`/`raise`/`offset`/`offset_by_time`/`log`/`are_convertible` are
//! plain arithmetic over [`Unit`]'s fields and behave identically for any
//! catalog, so they're default methods here rather than being reimplemented
//! by every [`UnitSystem`] — the interface still names them per §6 (a
//! from-scratch collaborator is free to override one), but a reference
//! catalog only has to supply the lookup tables.

use crate::unit::{LogUnit, Unit};

/// A catalog of known units and prefixes, plus the algebra for combining
/// them. §6 lists this as the driver's sole external dependency; nothing
/// in `unitspec-par` or `unitspec-drv` knows the shape of a concrete
/// catalog beyond this trait.
pub trait UnitSystem {
    /// The dimensionless unit with scale 1 — what an empty `spec` parses
    /// to (§4.4), and the running scalar identifier resolution starts
    /// from (§4.3).
    fn dimensionless_one(&self) -> Unit;

    /// Full-string lookup by name (`"meter"`). `None` if unknown.
    fn get_unit_by_name(&self, name: &str) -> Option<Unit>;

    /// Full-string lookup by symbol (`"m"`). `None` if unknown.
    fn get_unit_by_symbol(&self, symbol: &str) -> Option<Unit>;

    /// Longest known prefix *name* (`"kilo"`) that `remainder` starts
    /// with, as `(multiplier, chars_consumed)`. `None` if no registered
    /// prefix name is a prefix of `remainder`.
    fn get_prefix_by_name(&self, remainder: &str) -> Option<(f64, usize)>;

    /// Longest known prefix *symbol* (`"k"`) that `remainder` starts
    /// with, as `(multiplier, chars_consumed)`. `None` if no registered
    /// prefix symbol is a prefix of `remainder`.
    fn get_prefix_by_symbol(&self, remainder: &str) -> Option<(f64, usize)>;

    /// `factor * unit` — used for prefix application and numeric scaling
    /// (`number := INT | REAL` in the `basic` production).
    fn scale(&self, factor: f64, unit: &Unit) -> Unit {
        Unit {
            factor: unit.factor * factor,
            dimension: unit.dimension,
            offset: unit.offset,
            time_origin: unit.time_origin,
            log: unit.log.clone(),
        }
    }

    /// `a * b`, combining both scale factor and dimension. Any shift or
    /// log wrapping on either operand is dropped — the grammar only ever
    /// multiplies within a `product`, never a shifted or logged unit
    /// (those only appear at the top of `shift`/inside `LOGREF`, §4.4).
    fn multiply(&self, a: &Unit, b: &Unit) -> Unit {
        Unit::new(a.factor * b.factor, a.dimension + b.dimension)
    }

    /// `a / b`.
    fn divide(&self, a: &Unit, b: &Unit) -> Unit {
        Unit::new(a.factor / b.factor, a.dimension - b.dimension)
    }

    /// `unit ^ exponent` (`power := basic INT | basic EXPONENT`).
    fn raise(&self, unit: &Unit, exponent: i32) -> Unit {
        Unit::new(unit.factor.powi(exponent), unit.dimension.pow(exponent))
    }

    /// `product @ n` — an additive offset from a plain number
    /// (`shift := product SHIFT (REAL | INT)`).
    fn offset(&self, unit: &Unit, amount: f64) -> Unit {
        Unit {
            offset: unit.offset + amount,
            ..unit.clone()
        }
    }

    /// `product @ timestamp` — an additive offset expressed as seconds
    /// since the epoch (`shift := product SHIFT timestamp`, §4.4).
    fn offset_by_time(&self, unit: &Unit, seconds_since_epoch: f64) -> Unit {
        Unit {
            time_origin: Some(seconds_since_epoch),
            ..unit.clone()
        }
    }

    /// `lg(re reference)` — a logarithmic unit over `reference`, taken to
    /// `base` (`basic := LOGREF product ')'`).
    fn log(&self, base: f64, reference: &Unit) -> Unit {
        Unit {
            log: Some(Box::new(LogUnit {
                base,
                reference: reference.clone(),
            })),
            ..self.dimensionless_one()
        }
    }

    /// Whether `a` and `b` carry the same dimension — the one
    /// convertibility check the grammar itself needs, to decide whether a
    /// bare number after `SHIFT` should instead be lexed as a packed
    /// timestamp (§4.2.5, §9).
    fn are_convertible(&self, a: &Unit, b: &Unit) -> bool {
        a.dimension == b.dimension
    }

    /// Releases a unit the caller no longer needs. A no-op for any
    /// catalog backed by owned Rust values and Rust's own `Drop` — kept
    /// as an explicit trait method only because §6 names it as part of
    /// the collaborator interface a from-scratch implementor might still
    /// want (e.g. a catalog backed by a foreign allocator).
    fn free(&self, _unit: Unit) {}
}
