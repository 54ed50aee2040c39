//! The three input encodings the driver accepts (§4.1, §6).

/// How the raw bytes passed to [`crate::Driver::parse`] should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// 7-bit ASCII; bytes `>= 0x80` are malformed input.
    Ascii,
    /// UTF-8.
    Utf8,
    /// Latin-1 (ISO 8859-1): every byte is one code point, transcoded to
    /// UTF-8 before lexing (§4.1).
    Latin1,
}
