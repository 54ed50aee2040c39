//! unitspec-lex — lexical analysis for unit specifications (§4.2).
//!
//! Turns a unit-specification string into a stream of [`Token`]s. The lexer
//! is context-sensitive in exactly the two ways §4.2 calls for: it shares a
//! [`ParseContext`] with the parser to decide whether a digit run on the
//! right of a `SHIFT` is a packed date or a plain number, and the `Lexer`
//! itself carries no other cross-call state beyond cursor position.

pub mod context;
mod cursor;
mod lexer;
pub mod token;
pub mod transcode;
pub mod unicode;

pub use context::ParseContext;
pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
