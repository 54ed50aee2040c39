//! A minimal, self-contained [`UnitSystem`] catalog.
//!
//! §6 deliberately leaves the unit database outside the parser's scope;
//! this module supplies just enough of one — SI base units, a handful of
//! named derived units, and the standard metric prefixes — to exercise the
//! parser end to end in tests and the demo binary. It is not, and isn't
//! meant to be, a full UDUNITS-2-equivalent database: no imperial units, no
//! currency units, no user-supplied unit files.
//!
//! Table architecture grounded on
//! `other_examples/7b96e960_octofhir-ucum-rs__src-parser.rs.rs`'s
//! `once_cell::sync::Lazy` static lookup tables, adapted to
//! `rustc_hash::FxHashMap` (already the workspace's hash-map choice,
//! `unitspec-sys::system`) rather than introducing `phf` as a new
//! dependency.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::dimension::Dimension;
use crate::system::UnitSystem;
use crate::unit::Unit;

/// Prefix table entry: multiplier paired with its spelling, kept sorted
/// longest-spelling-first so `get_prefix_by_name`/`get_prefix_by_symbol`
/// can return the *longest* matching prefix (without this, `"deci"` would
/// never be reached because `"d"` isn't a registered name — but a
/// symbol table containing both `"da"` and `"d"` needs the longer one
/// tried first, or `"da"` would always be read as `"d"` + a stray `"a"`).
struct PrefixEntry {
    spelling: &'static str,
    multiplier: f64,
}

fn sorted_prefixes(entries: Vec<(&'static str, f64)>) -> Vec<PrefixEntry> {
    let mut out: Vec<PrefixEntry> = entries
        .into_iter()
        .map(|(spelling, multiplier)| PrefixEntry {
            spelling,
            multiplier,
        })
        .collect();
    out.sort_by_key(|e| std::cmp::Reverse(e.spelling.len()));
    out
}

static PREFIX_NAMES: Lazy<Vec<PrefixEntry>> = Lazy::new(|| {
    sorted_prefixes(vec![
        ("yotta", 1e24),
        ("zetta", 1e21),
        ("exa", 1e18),
        ("peta", 1e15),
        ("tera", 1e12),
        ("giga", 1e9),
        ("mega", 1e6),
        ("kilo", 1e3),
        ("hecto", 1e2),
        ("deca", 1e1),
        ("deci", 1e-1),
        ("centi", 1e-2),
        ("milli", 1e-3),
        ("micro", 1e-6),
        ("nano", 1e-9),
        ("pico", 1e-12),
        ("femto", 1e-15),
        ("atto", 1e-18),
        ("zepto", 1e-21),
        ("yocto", 1e-24),
    ])
});

static PREFIX_SYMBOLS: Lazy<Vec<PrefixEntry>> = Lazy::new(|| {
    sorted_prefixes(vec![
        ("Y", 1e24),
        ("Z", 1e21),
        ("E", 1e18),
        ("P", 1e15),
        ("T", 1e12),
        ("G", 1e9),
        ("M", 1e6),
        ("k", 1e3),
        ("h", 1e2),
        ("da", 1e1),
        ("d", 1e-1),
        ("c", 1e-2),
        ("m", 1e-3),
        ("\u{00B5}", 1e-6),
        ("u", 1e-6),
        ("n", 1e-9),
        ("p", 1e-12),
        ("f", 1e-15),
        ("a", 1e-18),
        ("z", 1e-21),
        ("y", 1e-24),
    ])
});

fn lookup_prefix(table: &[PrefixEntry], remainder: &str) -> Option<(f64, usize)> {
    table
        .iter()
        .find(|e| remainder.starts_with(e.spelling))
        .map(|e| (e.multiplier, e.spelling.chars().count()))
}

fn base(factor: f64, dimension: Dimension) -> Unit {
    Unit::new(factor, dimension)
}

static UNITS_BY_NAME: Lazy<FxHashMap<&'static str, Unit>> = Lazy::new(|| {
    let second = base(1.0, Dimension::TIME);
    let meter = base(1.0, Dimension::LENGTH);
    let kilogram = base(1.0, Dimension::MASS);
    let gram = base(1e-3, Dimension::MASS);
    let ampere = base(1.0, Dimension::CURRENT);
    let kelvin = base(1.0, Dimension::TEMPERATURE);
    let mole = base(1.0, Dimension::AMOUNT);
    let candela = base(1.0, Dimension::LUMINOUS);
    let radian = base(1.0, Dimension::DIMENSIONLESS);
    let steradian = base(1.0, Dimension::DIMENSIONLESS);
    let hertz = base(1.0, Dimension::TIME.pow(-1));
    let newton = base(1.0, Dimension::MASS + Dimension::LENGTH + Dimension::TIME.pow(-2));
    let pascal = base(
        1.0,
        Dimension::MASS + Dimension::LENGTH.pow(-1) + Dimension::TIME.pow(-2),
    );
    let joule = base(
        1.0,
        Dimension::MASS + Dimension::LENGTH.pow(2) + Dimension::TIME.pow(-2),
    );
    let watt = base(
        1.0,
        Dimension::MASS + Dimension::LENGTH.pow(2) + Dimension::TIME.pow(-3),
    );
    let minute = base(60.0, Dimension::TIME);
    let hour = base(3600.0, Dimension::TIME);
    let day = base(86_400.0, Dimension::TIME);
    let liter = base(1e-3, Dimension::LENGTH.pow(3));
    let celsius = Unit {
        offset: 273.15,
        ..kelvin.clone()
    };
    let percent = base(1e-2, Dimension::DIMENSIONLESS);

    let mut map = FxHashMap::default();
    map.insert("second", second);
    map.insert("meter", meter);
    map.insert("metre", map_get_clone(&map, "meter"));
    map.insert("kilogram", kilogram);
    map.insert("gram", gram);
    map.insert("ampere", ampere);
    map.insert("kelvin", kelvin);
    map.insert("mole", mole);
    map.insert("candela", candela);
    map.insert("radian", radian);
    map.insert("steradian", steradian);
    map.insert("hertz", hertz);
    map.insert("newton", newton);
    map.insert("pascal", pascal);
    map.insert("joule", joule);
    map.insert("watt", watt);
    map.insert("minute", minute);
    map.insert("hour", hour);
    map.insert("day", day);
    map.insert("liter", liter.clone());
    map.insert("litre", liter);
    map.insert("celsius", celsius);
    map.insert("percent", percent);
    map
});

/// `FxHashMap::insert` doesn't hand back a reference to an
/// already-inserted value, so `"metre"` (a pure spelling alias for
/// `"meter"`) is cloned back out by key right after insertion rather than
/// constructing the same `Unit` twice.
fn map_get_clone(map: &FxHashMap<&'static str, Unit>, key: &str) -> Unit {
    map.get(key).expect("alias target inserted first").clone()
}

static UNITS_BY_SYMBOL: Lazy<FxHashMap<&'static str, Unit>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("s", base(1.0, Dimension::TIME));
    map.insert("m", base(1.0, Dimension::LENGTH));
    map.insert("kg", base(1.0, Dimension::MASS));
    map.insert("g", base(1e-3, Dimension::MASS));
    map.insert("A", base(1.0, Dimension::CURRENT));
    map.insert("K", base(1.0, Dimension::TEMPERATURE));
    map.insert("mol", base(1.0, Dimension::AMOUNT));
    map.insert("cd", base(1.0, Dimension::LUMINOUS));
    map.insert("rad", base(1.0, Dimension::DIMENSIONLESS));
    map.insert("sr", base(1.0, Dimension::DIMENSIONLESS));
    map.insert("Hz", base(1.0, Dimension::TIME.pow(-1)));
    map.insert(
        "N",
        base(1.0, Dimension::MASS + Dimension::LENGTH + Dimension::TIME.pow(-2)),
    );
    map.insert(
        "Pa",
        base(
            1.0,
            Dimension::MASS + Dimension::LENGTH.pow(-1) + Dimension::TIME.pow(-2),
        ),
    );
    map.insert(
        "J",
        base(
            1.0,
            Dimension::MASS + Dimension::LENGTH.pow(2) + Dimension::TIME.pow(-2),
        ),
    );
    map.insert(
        "W",
        base(
            1.0,
            Dimension::MASS + Dimension::LENGTH.pow(2) + Dimension::TIME.pow(-3),
        ),
    );
    map.insert("min", base(60.0, Dimension::TIME));
    map.insert("h", base(3600.0, Dimension::TIME));
    map.insert("d", base(86_400.0, Dimension::TIME));
    map.insert("L", base(1e-3, Dimension::LENGTH.pow(3)));
    map.insert(
        "degC",
        Unit {
            offset: 273.15,
            ..base(1.0, Dimension::TEMPERATURE)
        },
    );
    map.insert("%", base(1e-2, Dimension::DIMENSIONLESS));
    map
});

/// The bundled reference catalog: SI base units, a handful of named
/// derived units, and the full set of metric prefixes. Stateless — every
/// method borrows from the process-wide static tables above, so
/// constructing one is free and any number of parses can share one
/// `&ReferenceSystem` concurrently (§5: the unit system is read-only
/// during a parse).
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceSystem;

impl ReferenceSystem {
    pub fn new() -> Self {
        Self
    }
}

impl UnitSystem for ReferenceSystem {
    fn dimensionless_one(&self) -> Unit {
        Unit::dimensionless(1.0)
    }

    fn get_unit_by_name(&self, name: &str) -> Option<Unit> {
        UNITS_BY_NAME.get(name).cloned()
    }

    fn get_unit_by_symbol(&self, symbol: &str) -> Option<Unit> {
        UNITS_BY_SYMBOL.get(symbol).cloned()
    }

    fn get_prefix_by_name(&self, remainder: &str) -> Option<(f64, usize)> {
        lookup_prefix(&PREFIX_NAMES, remainder)
    }

    fn get_prefix_by_symbol(&self, remainder: &str) -> Option<(f64, usize)> {
        lookup_prefix(&PREFIX_SYMBOLS, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_by_name_and_symbol_agree() {
        let sys = ReferenceSystem::new();
        assert_eq!(
            sys.get_unit_by_name("meter"),
            sys.get_unit_by_symbol("m")
        );
    }

    #[test]
    fn unknown_name_is_none() {
        let sys = ReferenceSystem::new();
        assert!(sys.get_unit_by_name("furlong").is_none());
    }

    #[test]
    fn kilo_prefix_by_name_consumes_four_chars() {
        let sys = ReferenceSystem::new();
        let (mult, n) = sys.get_prefix_by_name("kilogram").unwrap();
        assert_eq!(mult, 1e3);
        assert_eq!(n, 4);
    }

    #[test]
    fn deca_symbol_prefers_two_char_match_over_deci_symbol() {
        let sys = ReferenceSystem::new();
        let (mult, n) = sys.get_prefix_by_symbol("dam").unwrap();
        assert_eq!(mult, 1e1);
        assert_eq!(n, 2);
    }

    #[test]
    fn single_d_symbol_prefix_is_deci() {
        let sys = ReferenceSystem::new();
        let (mult, n) = sys.get_prefix_by_symbol("dm").unwrap();
        assert_eq!(mult, 1e-1);
        assert_eq!(n, 1);
    }

    #[test]
    fn hertz_dimension_is_inverse_time() {
        let sys = ReferenceSystem::new();
        let hz = sys.get_unit_by_symbol("Hz").unwrap();
        assert_eq!(hz.dimension, Dimension::TIME.pow(-1));
    }

    #[test]
    fn newton_matches_mass_length_over_time_squared() {
        let sys = ReferenceSystem::new();
        let n = sys.get_unit_by_name("newton").unwrap();
        let expected = Dimension::MASS + Dimension::LENGTH - Dimension::TIME.pow(2);
        assert_eq!(n.dimension, expected);
    }

    #[test]
    fn celsius_carries_kelvin_offset() {
        let sys = ReferenceSystem::new();
        let c = sys.get_unit_by_name("celsius").unwrap();
        assert_eq!(c.offset, 273.15);
        assert_eq!(c.dimension, Dimension::TEMPERATURE);
    }

    #[test]
    fn multiply_combines_factor_and_dimension() {
        let sys = ReferenceSystem::new();
        let kg = sys.get_unit_by_symbol("kg").unwrap();
        let m = sys.get_unit_by_symbol("m").unwrap();
        let kgm = sys.multiply(&kg, &m);
        assert_eq!(kgm.dimension, Dimension::MASS + Dimension::LENGTH);
        assert_eq!(kgm.factor, 1.0);
    }

    #[test]
    fn divide_meter_by_second_matches_velocity_dimension() {
        let sys = ReferenceSystem::new();
        let m = sys.get_unit_by_symbol("m").unwrap();
        let s = sys.get_unit_by_symbol("s").unwrap();
        let v = sys.divide(&m, &s);
        assert_eq!(v.dimension, Dimension::LENGTH - Dimension::TIME);
    }

    #[test]
    fn raise_meter_to_two_matches_liter_dimension_family() {
        let sys = ReferenceSystem::new();
        let m = sys.get_unit_by_symbol("m").unwrap();
        let m3 = sys.raise(&m, 3);
        assert_eq!(m3.dimension, Dimension::LENGTH.pow(3));
    }

    #[test]
    fn are_convertible_checks_dimension_only() {
        let sys = ReferenceSystem::new();
        let minute = sys.get_unit_by_name("minute").unwrap();
        let second = sys.get_unit_by_symbol("s").unwrap();
        let meter = sys.get_unit_by_symbol("m").unwrap();
        assert!(sys.are_convertible(&minute, &second));
        assert!(!sys.are_convertible(&minute, &meter));
    }

    #[test]
    fn scale_multiplies_factor_only() {
        let sys = ReferenceSystem::new();
        let m = sys.get_unit_by_symbol("m").unwrap();
        let scaled = sys.scale(1000.0, &m);
        assert_eq!(scaled.factor, 1000.0);
        assert_eq!(scaled.dimension, m.dimension);
    }

    #[test]
    fn log_wraps_reference_and_is_dimensionless() {
        let sys = ReferenceSystem::new();
        let watt = sys.get_unit_by_name("watt").unwrap();
        let milliwatt = sys.scale(1e-3, &watt);
        let bel = sys.log(10.0, &milliwatt);
        assert!(bel.is_dimensionless());
        assert_eq!(bel.log.unwrap().base, 10.0);
    }
}
