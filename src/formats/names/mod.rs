//! Character name table `._dt` file format
//!
//! Companion table to the quest log: fixed 20-byte records, ten
//! little-endian `u16` fields each, followed by a NUL-terminated
//! Shift-JIS strings region addressed through 16-bit offsets. The
//! strings region start is not stored and has to be recovered from the
//! lowest name offset in use.

mod reader;
mod writer;

pub use reader::{parse_names_bytes, parse_names_json, read_names};
pub use writer::{build_names_bytes, serialize_names_json, write_names};

use serde::{Deserialize, Serialize};

/// Size of each character record in bytes (10 × u16).
pub const RECORD_SIZE: usize = 20;

/// Number of opaque `u16` fields after the id and name offset.
pub const FIELD_COUNT: usize = 8;

/// Customary strings region start, used when no record names one.
pub const DEFAULT_STRINGS_OFFSET: usize = 0x2E4;

/// The record scan gives up past this offset.
pub const RECORD_SCAN_LIMIT: usize = 0x1000;

/// A single character record in document form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub id: u16,
    /// Display name; the only field localization touches.
    pub name: String,
    /// Opaque record values, preserved verbatim.
    #[serde(default)]
    pub fields: [u16; FIELD_COUNT],
}

/// File-level facts recorded on decompile; informational on compile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameTableInfo {
    pub original_size: usize,
    pub encoding: String,
    pub record_size: usize,
    pub strings_section_start: usize,
}

/// The editable document form of a character name table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameTableDocument {
    #[serde(default)]
    pub file_info: NameTableInfo,
    pub characters: Vec<CharacterEntry>,
}
