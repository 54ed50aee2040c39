//! Integration coverage of the concrete scenarios in §8: one test per
//! row that exercises the full pipeline (transcode → trim → lex → parse
//! → classify) through [`unitspec_drv::Driver`] rather than any one
//! crate in isolation.

use unitspec_drv::{Driver, Encoding, Status};
use unitspec_sys::{Dimension, ReferenceSystem};

fn driver(system: &ReferenceSystem) -> Driver<'_, ReferenceSystem> {
    Driver::new(system)
}

#[test]
fn empty_string_is_dimensionless_success() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b""), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert!(unit.is_dimensionless());
}

#[test]
fn simple_named_unit_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"meter"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert_eq!(unit.dimension, Dimension::LENGTH);
}

#[test]
fn derived_unit_expression_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"kg m2 s-2"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    let expected = Dimension::MASS + Dimension::LENGTH.pow(2) - Dimension::TIME.pow(2);
    assert_eq!(unit.dimension, expected);
}

#[test]
fn prefixed_unit_scales_correctly() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"kilometer"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert_eq!(unit.factor, 1e3);
}

#[test]
fn celsius_offset_shift_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"K @ 273.15"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert_eq!(unit.offset, 273.15);
}

#[test]
fn second_shifted_by_a_packed_date_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"s @ 19700101"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert_eq!(unit.time_origin, Some(0.0));
}

#[test]
fn logarithmic_reference_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let unit = d.parse(Some(b"lg(re:1 W)"), Encoding::Utf8).unwrap();
    assert_eq!(d.last_status(), Status::Success);
    assert!(unit.is_dimensionless());
}

#[test]
fn unknown_identifier_is_status_unknown() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d.parse(Some(b"smoot"), Encoding::Utf8).is_none());
    assert_eq!(d.last_status(), Status::Unknown);
}

#[test]
fn unbalanced_open_paren_is_status_syntax() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d.parse(Some(b"(kg"), Encoding::Utf8).is_none());
    assert_eq!(d.last_status(), Status::Syntax);
}

#[test]
fn null_string_is_status_bad_arg() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d.parse(None, Encoding::Utf8).is_none());
    assert_eq!(d.last_status(), Status::BadArg);
}

#[test]
fn forbidden_numeric_literal_is_status_syntax() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d.parse(Some(b"NaN"), Encoding::Utf8).is_none());
    assert_eq!(d.last_status(), Status::Syntax);
}

#[test]
fn leap_second_at_end_of_day_succeeds() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d
        .parse(Some(b"s @ 1970-01-01T23:59:60"), Encoding::Utf8)
        .is_some());
    assert_eq!(d.last_status(), Status::Success);
}

#[test]
fn second_sixty_outside_end_of_day_is_status_syntax() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    assert!(d
        .parse(Some(b"s @ 1970-01-01T12:00:60"), Encoding::Utf8)
        .is_none());
    assert_eq!(d.last_status(), Status::Syntax);
}

#[test]
fn surrounding_whitespace_does_not_change_the_result() {
    let system = ReferenceSystem::new();
    let d = driver(&system);
    let bare = d.parse(Some(b"kg"), Encoding::Utf8).unwrap();
    let padded = d.parse(Some(b"  kg\t\n"), Encoding::Utf8).unwrap();
    assert_eq!(bare.dimension, padded.dimension);
    assert_eq!(bare.factor, padded.factor);
}
