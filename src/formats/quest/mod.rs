//! Quest table `._dt` file format
//!
//! Fixed-layout binary table holding the game's quest log: 80 records
//! of 28 bytes, each carrying four little-endian file offsets into a
//! trailing string region. Decodes to an editable JSON document and
//! compiles back to a byte-compatible binary.

mod reader;
mod writer;

pub use reader::{parse_quest_bytes, parse_quest_json, read_quest};
pub use writer::{build_quest_bytes, serialize_quest_json, write_quest};

use serde::{Deserialize, Serialize};

/// Fixed number of quest records in the table.
pub const ENTRY_COUNT: usize = 80;

/// Size of each quest record in bytes (1 + 11 + 4×4).
pub const ENTRY_SIZE: usize = 28;

/// Number of opaque bytes between the counter and the pointers.
pub const RESERVED_SIZE: usize = 11;

/// Size of the fixed record region at the start of the file.
pub const HEADER_SIZE: usize = ENTRY_COUNT * ENTRY_SIZE;

/// Format tag written into document metadata.
pub const FORMAT_NAME: &str = "Trails from Zero Quest DT";

/// A single quest record in document form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestEntry {
    /// Record slot in the fixed table; decides where the record is
    /// written back on compile.
    pub index: usize,
    /// Opaque per-quest byte, preserved verbatim.
    #[serde(default)]
    pub counter: u8,
    /// Opaque bytes 1..=11 of the record, preserved verbatim.
    #[serde(default)]
    pub reserved: Vec<u8>,
    /// Hex rendering of `reserved` for human readers; ignored on compile.
    #[serde(default)]
    pub reserved_hex: String,
    /// Quest title.
    #[serde(default)]
    pub name: String,
    /// Client (quest giver) name.
    #[serde(default)]
    pub client: String,
    /// Quest board description.
    #[serde(default)]
    pub description: String,
    /// Step-by-step progress strings, in display order.
    #[serde(default)]
    pub progress: Vec<String>,
    /// Original pointer values, diagnostic only; ignored on compile.
    #[serde(default)]
    pub pointers: QuestPointers,
}

/// Original pointer values of a record, as 8-digit hex strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestPointers {
    pub name_ptr: String,
    pub client_ptr: String,
    pub description_ptr: String,
    pub progress_ptr: String,
}

/// File-level facts recorded on decompile; informational on compile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestMetadata {
    pub format: String,
    pub encoding: String,
    pub endianness: String,
    pub entry_count: usize,
    pub entry_size: usize,
    pub file_size: usize,
}

/// The editable document form of a quest table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDocument {
    #[serde(default)]
    pub metadata: QuestMetadata,
    pub quests: Vec<QuestEntry>,
}
