//! Quest table compilation and writing

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{ENTRY_COUNT, ENTRY_SIZE, HEADER_SIZE, QuestDocument, RESERVED_SIZE};
use crate::error::{Error, Result};
use crate::formats::common::BodyArena;
use crate::text;

/// Write a quest document to disk as a `._dt` binary
///
/// # Errors
///
/// Returns [`Error::QuestCountMismatch`] or [`Error::QuestIndexOutOfRange`]
/// for documents that do not fit the fixed table, and [`Error::Io`] if the
/// file cannot be written.
///
/// [`Error::QuestCountMismatch`]: crate::Error::QuestCountMismatch
/// [`Error::QuestIndexOutOfRange`]: crate::Error::QuestIndexOutOfRange
/// [`Error::Io`]: crate::Error::Io
pub fn write_quest<P: AsRef<Path>>(path: P, doc: &QuestDocument) -> Result<()> {
    let bytes = build_quest_bytes(doc)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Compile a quest document into `._dt` bytes
///
/// Layout is body-before-header: direct strings for every record first,
/// then all progress strings, then all progress pointer arrays. Keeping
/// the arrays contiguous makes the distance between consecutive
/// progress pointers equal to the array size, which is what the decoder
/// relies on.
///
/// # Errors
///
/// Returns [`Error::QuestCountMismatch`] if the document does not hold
/// exactly the fixed entry count, [`Error::QuestIndexOutOfRange`] if an
/// entry names a slot outside the table.
///
/// [`Error::QuestCountMismatch`]: crate::Error::QuestCountMismatch
/// [`Error::QuestIndexOutOfRange`]: crate::Error::QuestIndexOutOfRange
pub fn build_quest_bytes(doc: &QuestDocument) -> Result<Vec<u8>> {
    if doc.quests.len() != ENTRY_COUNT {
        return Err(Error::QuestCountMismatch {
            expected: ENTRY_COUNT,
            found: doc.quests.len(),
        });
    }
    for entry in &doc.quests {
        if entry.index >= ENTRY_COUNT {
            return Err(Error::QuestIndexOutOfRange {
                index: entry.index,
                count: ENTRY_COUNT,
            });
        }
    }

    let mut arena = BodyArena::new(HEADER_SIZE);

    // Phase 1: direct strings, record order. Empty text still takes a
    // terminator byte so every direct pointer is non-zero.
    let mut direct_ptrs = Vec::with_capacity(doc.quests.len());
    for entry in &doc.quests {
        let name_ptr = allocate_string(&mut arena, &entry.name)?;
        let client_ptr = allocate_string(&mut arena, &entry.client)?;
        let desc_ptr = allocate_string(&mut arena, &entry.description)?;
        direct_ptrs.push((name_ptr, client_ptr, desc_ptr));
    }

    // Phase 2: progress strings for every record, then the pointer
    // arrays as one contiguous run.
    let mut step_ptrs = Vec::with_capacity(doc.quests.len());
    for entry in &doc.quests {
        let mut ptrs = Vec::with_capacity(entry.progress.len());
        for step in &entry.progress {
            ptrs.push(allocate_string(&mut arena, step)?);
        }
        step_ptrs.push(ptrs);
    }
    let mut progress_ptrs = Vec::with_capacity(doc.quests.len());
    for ptrs in &step_ptrs {
        if ptrs.is_empty() {
            progress_ptrs.push(0);
            continue;
        }
        let mut blob = Vec::with_capacity(ptrs.len() * 4);
        for &ptr in ptrs {
            blob.extend_from_slice(&ptr.to_le_bytes());
        }
        progress_ptrs.push(arena.allocate(&blob));
    }

    // Header region, each record at index * ENTRY_SIZE.
    let mut header = Cursor::new(vec![0u8; HEADER_SIZE]);
    for (i, entry) in doc.quests.iter().enumerate() {
        let (name_ptr, client_ptr, desc_ptr) = direct_ptrs[i];
        header.set_position((entry.index * ENTRY_SIZE) as u64);
        header.write_u8(entry.counter)?;
        let mut reserved = [0u8; RESERVED_SIZE];
        let copy_len = entry.reserved.len().min(RESERVED_SIZE);
        reserved[..copy_len].copy_from_slice(&entry.reserved[..copy_len]);
        header.write_all(&reserved)?;
        header.write_u32::<LittleEndian>(name_ptr)?;
        header.write_u32::<LittleEndian>(client_ptr)?;
        header.write_u32::<LittleEndian>(desc_ptr)?;
        header.write_u32::<LittleEndian>(progress_ptrs[i])?;
    }

    let mut output = header.into_inner();
    output.extend_from_slice(&arena.into_bytes());
    tracing::debug!("Compiled {} quest records into {} bytes", doc.quests.len(), output.len());
    Ok(output)
}

/// Render a quest document as pretty JSON with the given indent width
///
/// The returned string carries a trailing newline.
///
/// # Errors
///
/// Returns [`Error::JsonError`] if JSON serialization fails.
///
/// [`Error::JsonError`]: crate::Error::JsonError
pub fn serialize_quest_json(doc: &QuestDocument, indent: usize) -> Result<String> {
    crate::formats::common::json::to_pretty_json(doc, indent)
}

fn allocate_string(arena: &mut BodyArena, value: &str) -> Result<u32> {
    let mut bytes = text::encode_field(value)?;
    bytes.push(0);
    Ok(arena.allocate(&bytes))
}
