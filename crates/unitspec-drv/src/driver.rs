//! The driver algorithm (§4.5): the seven steps between "caller hands us a
//! byte string" and "caller gets back a `Unit` or a `Status`".
//!
//! Grounded on `faxc-drv`'s `Session`-orchestrates-phases shape (`compile()`
//! calling ordered private phase methods) — here `parse()` calls its seven
//! steps as private helpers in order, collecting everything a caller needs
//! (the resulting unit, the status, and the reported messages) rather than
//! a compiler's multi-file output.

use std::cell::{Cell, RefCell};

use tracing::{debug, warn};
use unitspec_lex::transcode::transcode_latin1;
use unitspec_lex::unicode::is_trim_space;
use unitspec_par::Failure;
use unitspec_sys::{Unit, UnitSystem};
use unitspec_util::{Handler, UtilError, UtilResult};

use crate::encoding::Encoding;
use crate::reporter::{NullReporter, Reporter};
use crate::status::Status;

const TRAILING_SNIPPET_MAX_CHARS: usize = 50;

/// One parse session against a unit system. Stateless beyond `last_status`
/// and the reusable Latin-1 transcoding buffer — nothing here is retained
/// from one `parse()` call to the next (§5: no streaming, no state that
/// outlives a single parse).
pub struct Driver<'a, S: UnitSystem, R: Reporter = NullReporter> {
    system: &'a S,
    reporter: R,
    last_status: Cell<Status>,
    transcode_buf: RefCell<String>,
}

impl<'a, S: UnitSystem> Driver<'a, S, NullReporter> {
    pub fn new(system: &'a S) -> Self {
        Self::with_reporter(system, NullReporter)
    }
}

impl<'a, S: UnitSystem, R: Reporter> Driver<'a, S, R> {
    pub fn with_reporter(system: &'a S, reporter: R) -> Self {
        Self {
            system,
            reporter,
            last_status: Cell::new(Status::Success),
            transcode_buf: RefCell::new(String::new()),
        }
    }

    pub fn last_status(&self) -> Status {
        self.last_status.get()
    }

    /// Parses `input` as `encoding`-encoded bytes against this driver's
    /// unit system. `None` for `input` models a null string pointer (§4.5
    /// step 1); there is no way to pass a null unit system since `system`
    /// is a Rust reference, not a pointer that can dangle.
    pub fn parse(&self, input: Option<&[u8]>, encoding: Encoding) -> Option<Unit> {
        let Some(bytes) = input else {
            self.fail(Status::BadArg, "null unit specification string");
            return None;
        };

        let latin1_sourced = encoding == Encoding::Latin1;
        let source: String = match self.decode(bytes, encoding) {
            Ok(s) => s,
            Err(UtilError::InvalidEncoding(message)) => {
                // Malformed input under the requested encoding (§7): a
                // shape failure in the bytes themselves, not a null
                // system/string, so it is `SYNTAX` rather than `BAD_ARG`.
                self.fail(Status::Syntax, &message);
                return None;
            }
        };

        let trimmed = trim_for_parsing(&source, latin1_sourced);
        debug!(input_len = trimmed.len(), ?encoding, "parsing unit specification");

        let handler = Handler::new();
        let result = unitspec_par::parse(trimmed, self.system, &handler);

        match result.unit {
            Some(unit) if result.consumed >= trimmed.len() => {
                self.last_status.set(Status::Success);
                Some(unit)
            }
            Some(unit) => {
                drop(unit);
                let snippet = truncated_snippet(&trimmed[result.consumed..]);
                self.fail(
                    Status::Syntax,
                    &format!("Unexpected text after unit specification: \"{snippet}\""),
                );
                None
            }
            None => {
                for diagnostic in handler.diagnostics() {
                    self.reporter.report(&diagnostic.message);
                }
                let status = match result.failure {
                    Some(Failure::UnknownIdentifier) => Status::Unknown,
                    _ => Status::Syntax,
                };
                self.last_status.set(status);
                None
            }
        }
    }

    fn decode(&self, bytes: &[u8], encoding: Encoding) -> UtilResult<String> {
        match encoding {
            Encoding::Ascii => {
                if let Some(pos) = bytes.iter().position(|b| *b >= 0x80) {
                    return Err(UtilError::InvalidEncoding(format!(
                        "byte {:#04x} at offset {pos} is not 7-bit ASCII",
                        bytes[pos]
                    )));
                }
                std::str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|e| UtilError::InvalidEncoding(e.to_string()))
            }
            Encoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| UtilError::InvalidEncoding(e.to_string())),
            Encoding::Latin1 => {
                let mut buf = self.transcode_buf.borrow_mut();
                transcode_latin1(bytes, &mut buf);
                Ok(buf.clone())
            }
        }
    }

    fn fail(&self, status: Status, message: &str) {
        warn!(?status, message, "unit specification parse failed");
        self.reporter.report(message);
        self.last_status.set(status);
    }
}

/// §4.5 step 3: trims leading/trailing whitespace using the lexer's own
/// `is_trim_space` (space, tab, LF, CR, FF, VT, plus NBSP when the source
/// came from Latin-1). Embedded newlines are not stripped here and remain
/// a lexer-level error (§4.2.1) since this is a leading/trailing trim
/// only.
fn trim_for_parsing(source: &str, latin1_sourced: bool) -> &str {
    source.trim_matches(|c: char| is_trim_space(c, latin1_sourced))
}

fn truncated_snippet(s: &str) -> String {
    if s.chars().count() <= TRAILING_SNIPPET_MAX_CHARS {
        s.to_string()
    } else {
        s.chars().take(TRAILING_SNIPPET_MAX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitspec_sys::ReferenceSystem;

    #[test]
    fn null_input_is_bad_arg() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(None, Encoding::Utf8).is_none());
        assert_eq!(driver.last_status(), Status::BadArg);
    }

    #[test]
    fn empty_input_is_dimensionless_success() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        let unit = driver.parse(Some(b""), Encoding::Utf8).unwrap();
        assert_eq!(driver.last_status(), Status::Success);
        assert!(unit.is_dimensionless());
    }

    #[test]
    fn plain_unit_succeeds() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        let unit = driver.parse(Some(b"kg m s-2"), Encoding::Utf8).unwrap();
        assert_eq!(driver.last_status(), Status::Success);
        assert_eq!(
            unit.dimension,
            unitspec_sys::Dimension::MASS + unitspec_sys::Dimension::LENGTH
                - unitspec_sys::Dimension::TIME.pow(2)
        );
    }

    #[test]
    fn leading_and_trailing_whitespace_is_trimmed() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(Some(b"  m  "), Encoding::Utf8).is_some());
        assert_eq!(driver.last_status(), Status::Success);
    }

    #[test]
    fn unknown_identifier_reports_unknown_status() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(Some(b"smoot"), Encoding::Utf8).is_none());
        assert_eq!(driver.last_status(), Status::Unknown);
    }

    #[test]
    fn second_unopened_closing_paren_is_residue_not_the_stray_paren_quirk() {
        // The first stray ')' is swallowed by the known quirk (§4.4); a
        // second one has nothing left to absorb it and is reported as
        // trailing input.
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(Some(b"m))"), Encoding::Utf8).is_none());
        assert_eq!(driver.last_status(), Status::Syntax);
    }

    #[test]
    fn missing_closing_paren_is_syntax() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(Some(b"(m/s"), Encoding::Utf8).is_none());
        assert_eq!(driver.last_status(), Status::Syntax);
    }

    #[test]
    fn latin1_input_is_transcoded_before_lexing() {
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        // 0xB0 is DEGREE SIGN in Latin-1; "°s" lexes as one identifier
        // (°, like µ, is a letter-like code point) that isn't in the
        // reference catalog. What matters here is that the byte was
        // accepted and transcoded into a single token rather than
        // rejected outright or split across two identifiers.
        let result = driver.parse(Some(&[0xB0, b's']), Encoding::Latin1);
        assert!(result.is_none());
        assert_eq!(driver.last_status(), Status::Unknown);
    }

    #[test]
    fn non_ascii_byte_under_ascii_encoding_is_syntax() {
        // BAD_ARG is reserved for a null system/string (§7); a non-ASCII
        // byte under a requested ASCII encoding is a shape failure in the
        // input, classified the same way other lexical/encoding failures
        // are.
        let system = ReferenceSystem::new();
        let driver = Driver::new(&system);
        assert!(driver.parse(Some(&[0xB5]), Encoding::Ascii).is_none());
        assert_eq!(driver.last_status(), Status::Syntax);
    }

    #[test]
    fn reporter_receives_the_trailing_text_message() {
        let system = ReferenceSystem::new();
        let messages = std::rc::Rc::new(RefCell::new(Vec::new()));
        struct Collecting(std::rc::Rc<RefCell<Vec<String>>>);
        impl Reporter for Collecting {
            fn report(&self, message: &str) {
                self.0.borrow_mut().push(message.to_string());
            }
        }
        let driver = Driver::with_reporter(&system, Collecting(messages.clone()));
        driver.parse(Some(b"m))"), Encoding::Utf8);
        assert!(messages.borrow().iter().any(|m| m.contains("Unexpected text")));
    }
}
