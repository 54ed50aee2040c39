//! Lexer module.
//!
//! Organized the way `faxc-lex` splits its lexer: a core dispatch module
//! plus one module per token family. `datetime` and `logref` have no
//! direct teacher analog — they implement §4.2.5/§4.2.6, grounded on the
//! character-class/digit-run scanning idioms of
//! `other_examples/7b96e960_octofhir-ucum-rs__src-parser.rs.rs`.

mod core;
mod datetime;
mod identifier;
mod logref;
mod number;
mod operator;

pub use core::Lexer;
