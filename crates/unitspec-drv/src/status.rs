//! The driver's result status (§7).

/// The outcome of one [`crate::Driver::parse`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Success,
    /// The input string or unit system was null (§4.5 step 1).
    BadArg,
    /// A lexical or grammatical failure: an unexpected token, a missing
    /// `)`, a forbidden numeric literal, or trailing garbage after an
    /// otherwise complete specification.
    Syntax,
    /// §4.3's prefix-peeling identifier resolution exhausted every
    /// candidate without finding a match.
    Unknown,
    /// An allocation or transcoding failure. Unreachable in practice under
    /// Rust's abort-on-allocation-failure default, but kept as a distinct
    /// variant because §7 names it as part of the collaborator-visible
    /// status set a caller may match on.
    Os,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}
