//! unitspec-drv — the driver algorithm (§4.5) that ties transcoding,
//! trimming, lexing, parsing, and status classification into the one
//! entry point a caller actually uses.
//!
//! Grounded on `faxc-drv`'s `Session`-orchestrates-phases shape and its
//! thin `main.rs` binary pattern; unlike `faxc-drv`'s multi-phase compiler
//! pipeline (`read_sources` → `run_pipeline` → `emit_output`), there is
//! exactly one pipeline here and it is `Driver::parse`.

mod driver;
mod encoding;
mod reporter;
mod status;

pub use driver::Driver;
pub use encoding::Encoding;
pub use reporter::{NullReporter, Reporter, StderrReporter};
pub use status::Status;
