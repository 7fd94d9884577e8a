//! Character encoding support for file input and output
//!
//! Reading sniffs a byte-order mark first; a BOM always wins over the
//! configured encoding. Writing encodes the rendered text with the
//! configured encoding, UTF-8 by default.

use crate::error::{CsvError, Result};
use encoding_rs::Encoding;

/// Decode raw file bytes into text, honoring a leading BOM if present
///
/// Decode failures are configuration errors surfaced before any parse event.
pub fn decode_bytes(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((detected, len)) => (detected, len),
        None => (encoding, 0),
    };

    match encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..]) {
        Some(text) => Ok(text.into_owned()),
        None => Err(CsvError::Decode(format!(
            "input is not valid {}",
            encoding.name()
        ))),
    }
}

/// Encode text for output with the given encoding
///
/// Characters unmappable in the target encoding are replaced with numeric
/// character references, per the WHATWG encoder behavior.
pub fn encode_text(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
