//! Crate-wide error types for `unitspec-util`'s own fallible operations.
//!
//! Lexer/parser failures are reported through `diagnostic::Handler`, not
//! through `Result` (§4.5 — the driver must keep going far enough to
//! classify a failure). `UtilError` is for the one operation upstream of
//! the lexer/parser that is a plain `Result` shape: `unitspec-drv`'s
//! `Driver::decode`, which must turn a malformed byte sequence under a
//! requested encoding into a typed error the driver can classify as
//! `Status::Syntax` (§7) rather than matching on a bare `String`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    #[error("invalid input encoding: {0}")]
    InvalidEncoding(String),
}

pub type UtilResult<T> = std::result::Result<T, UtilError>;
