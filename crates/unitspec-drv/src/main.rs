//! Thin demo binary: parses its one positional argument as a unit
//! specification against the bundled reference catalog and prints the
//! result. Not a general-purpose CLI — §6 excludes one from the core, so
//! there is no flag parsing beyond `-v`/`--verbose` for log level.
//!
//! Logging setup grounded on `faxt/src/main.rs`'s `tracing`/
//! `tracing-subscriber` initialization (the only place in the teacher pack
//! combining the two); everything else about `faxt`'s CLI (its `clap`
//! subcommands) has no counterpart here.

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use unitspec_drv::{Driver, Encoding, StderrReporter, Status};
use unitspec_sys::ReferenceSystem;

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");

    init_logging(verbose);

    let Some(spec) = args.first() else {
        eprintln!("usage: unitspec [-v|--verbose] <unit specification>");
        return ExitCode::from(2);
    };

    let system = ReferenceSystem::new();
    let driver = Driver::with_reporter(&system, StderrReporter);

    match driver.parse(Some(spec.as_bytes()), Encoding::Utf8) {
        Some(unit) => {
            println!("{spec:?} => {unit:?}");
            ExitCode::SUCCESS
        }
        None => ExitCode::from(status_exit_code(driver.last_status())),
    }
}

fn status_exit_code(status: Status) -> u8 {
    match status {
        Status::Success => 0,
        Status::BadArg => 2,
        Status::Syntax => 3,
        Status::Unknown => 4,
        Status::Os => 70,
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
