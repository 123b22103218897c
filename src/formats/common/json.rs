//! JSON pretty-printing shared by the table documents

use crate::error::Result;
use serde::Serialize;

/// Render a document as pretty JSON with a configurable indent width.
///
/// The returned string carries a trailing newline.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    let mut text = String::from_utf8(buf)?;
    text.push('\n');
    Ok(text)
}
