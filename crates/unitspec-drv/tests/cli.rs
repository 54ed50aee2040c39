//! End-to-end tests against the `unitspec` demo binary.
//!
//! Grounded on `faxc-drv`'s `assert_cmd`/`predicates` integration-test
//! dependency pair.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn parses_a_plain_unit() {
    Command::cargo_bin("unitspec")
        .unwrap()
        .arg("kg m s-2")
        .assert()
        .success()
        .stdout(predicate::str::contains("=>"));
}

#[test]
fn no_argument_exits_with_usage() {
    Command::cargo_bin("unitspec")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("usage:"));
}

#[test]
fn unknown_identifier_exits_with_unknown_code() {
    Command::cargo_bin("unitspec")
        .unwrap()
        .arg("smoot")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn trailing_garbage_exits_with_syntax_code() {
    Command::cargo_bin("unitspec")
        .unwrap()
        .arg("m))")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn verbose_flag_does_not_change_exit_status() {
    Command::cargo_bin("unitspec")
        .unwrap()
        .args(["--verbose", "m"])
        .assert()
        .success();
}
