//! Shift-JIS transcoding for `._dt` string data
//!
//! Strings in the tables are NUL-terminated Shift-JIS with one reserved
//! control byte: `0x01` marks an in-game line break and surfaces in the
//! document form as the literal token `<LINE>`. Encoding consults the
//! [`substitution`] rules first so translator-typed characters outside
//! the encoding's repertoire degrade to readable ASCII instead of `?`.

mod substitution;

use encoding_rs::SHIFT_JIS;

use crate::{Error, Result};

/// Control byte the game engine renders as a line break.
pub const LINE_BREAK_BYTE: u8 = 0x01;

/// Document-side token standing in for [`LINE_BREAK_BYTE`].
pub const LINE_BREAK_TOKEN: &str = "<LINE>";

/// Name of the encoding as recorded in document metadata.
pub const ENCODING_NAME: &str = "shift_jis";

fn decode_sjis(bytes: &[u8]) -> (String, bool) {
    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    let text = decoded.replace(char::from(LINE_BREAK_BYTE), LINE_BREAK_TOKEN);
    (text, had_errors)
}

/// Decodes a raw Shift-JIS field into document text.
///
/// Malformed byte sequences decode to U+FFFD with a warning rather than
/// failing; the line-break control byte becomes [`LINE_BREAK_TOKEN`].
pub fn decode_field(bytes: &[u8]) -> String {
    let (text, had_errors) = decode_sjis(bytes);
    if had_errors {
        tracing::warn!("Malformed Shift-JIS sequence replaced with U+FFFD");
    }
    text
}

/// Reads the NUL-terminated string starting at `offset`.
///
/// A zero or out-of-bounds offset yields an empty string; a missing
/// terminator reads to end of buffer. Corrupt pointers must not abort a
/// whole-file decode.
pub(crate) fn read_cstring(data: &[u8], offset: usize) -> String {
    if offset == 0 || offset >= data.len() {
        return String::new();
    }
    let end = data[offset..]
        .iter()
        .position(|&b| b == 0)
        .map_or(data.len(), |pos| offset + pos);
    let (text, had_errors) = decode_sjis(&data[offset..end]);
    if had_errors {
        tracing::warn!(
            "Malformed Shift-JIS sequence at offset {:#x} replaced with U+FFFD",
            offset
        );
    }
    text
}

/// Encodes document text into Shift-JIS bytes, without the terminator.
///
/// `<LINE>` tokens become the 0x01 control byte. Each character is
/// matched against the substitution rules first, then encoded natively;
/// anything still unmappable becomes `?` with a warning. The only error
/// is a substitution rule whose own replacement fails to encode, which
/// would mean the table itself is broken.
pub fn encode_field(text: &str) -> Result<Vec<u8>> {
    let line_break = char::from(LINE_BREAK_BYTE).to_string();
    let normalized = text.replace(LINE_BREAK_TOKEN, &line_break);
    let mut out = Vec::with_capacity(normalized.len());
    for ch in normalized.chars() {
        if let Some(replacement) = substitution::lookup(ch) {
            let (encoded, _, had_errors) = SHIFT_JIS.encode(replacement);
            if had_errors {
                return Err(Error::UnencodableSubstitution {
                    ch,
                    replacement: replacement.to_string(),
                });
            }
            out.extend_from_slice(&encoded);
            continue;
        }
        let mut buf = [0u8; 4];
        let (encoded, _, had_errors) = SHIFT_JIS.encode(ch.encode_utf8(&mut buf));
        if had_errors {
            tracing::warn!("No Shift-JIS mapping for U+{:04X}, emitting '?'", u32::from(ch));
            out.push(b'?');
        } else {
            out.extend_from_slice(&encoded);
        }
    }
    Ok(out)
}
