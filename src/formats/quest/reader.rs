//! Quest table reading and decompilation

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use super::{
    ENTRY_COUNT, ENTRY_SIZE, FORMAT_NAME, HEADER_SIZE, QuestDocument, QuestEntry, QuestMetadata,
    QuestPointers, RESERVED_SIZE,
};
use crate::error::{Error, Result};
use crate::text;

/// One record's raw header fields, before pointer resolution.
struct RawRecord {
    counter: u8,
    reserved: [u8; RESERVED_SIZE],
    name_ptr: u32,
    client_ptr: u32,
    desc_ptr: u32,
    progress_ptr: u32,
}

/// Read a quest table file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::QuestTableTooSmall`] if the file cannot hold the
/// fixed record region.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::QuestTableTooSmall`]: crate::Error::QuestTableTooSmall
pub fn read_quest<P: AsRef<Path>>(path: P) -> Result<QuestDocument> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_quest_bytes(&buffer)
}

/// Parse quest table data from bytes
///
/// Pointer resolution is permissive: zero and out-of-bounds pointers
/// decode to empty text so a partially corrupt file still yields every
/// readable record.
///
/// # Errors
///
/// Returns [`Error::QuestTableTooSmall`] if the data cannot hold the
/// fixed record region.
///
/// [`Error::QuestTableTooSmall`]: crate::Error::QuestTableTooSmall
pub fn parse_quest_bytes(data: &[u8]) -> Result<QuestDocument> {
    if data.len() < HEADER_SIZE {
        return Err(Error::QuestTableTooSmall {
            needed: HEADER_SIZE,
            found: data.len(),
        });
    }

    // Record fields are taken at face value here; bounds are enforced
    // during resolution.
    let mut cursor = Cursor::new(data);
    let mut records = Vec::with_capacity(ENTRY_COUNT);
    for _ in 0..ENTRY_COUNT {
        let counter = cursor.read_u8()?;
        let mut reserved = [0u8; RESERVED_SIZE];
        cursor.read_exact(&mut reserved)?;
        records.push(RawRecord {
            counter,
            reserved,
            name_ptr: cursor.read_u32::<LittleEndian>()?,
            client_ptr: cursor.read_u32::<LittleEndian>()?,
            desc_ptr: cursor.read_u32::<LittleEndian>()?,
            progress_ptr: cursor.read_u32::<LittleEndian>()?,
        });
    }

    let mut quests = Vec::with_capacity(ENTRY_COUNT);
    for (index, record) in records.iter().enumerate() {
        quests.push(QuestEntry {
            index,
            counter: record.counter,
            reserved: record.reserved.to_vec(),
            reserved_hex: hex_string(&record.reserved),
            name: text::read_cstring(data, record.name_ptr as usize),
            client: text::read_cstring(data, record.client_ptr as usize),
            description: text::read_cstring(data, record.desc_ptr as usize),
            progress: read_progress(data, &records, index),
            pointers: QuestPointers {
                name_ptr: format_pointer(record.name_ptr),
                client_ptr: format_pointer(record.client_ptr),
                description_ptr: format_pointer(record.desc_ptr),
                progress_ptr: format_pointer(record.progress_ptr),
            },
        });
    }

    tracing::debug!("Decoded {} quest records from {} bytes", quests.len(), data.len());

    Ok(QuestDocument {
        metadata: QuestMetadata {
            format: FORMAT_NAME.to_string(),
            encoding: text::ENCODING_NAME.to_string(),
            endianness: "little".to_string(),
            entry_count: ENTRY_COUNT,
            entry_size: ENTRY_SIZE,
            file_size: data.len(),
        },
        quests,
    })
}

/// Parse a quest document from its JSON text form
///
/// # Errors
///
/// Returns [`Error::JsonError`] if the JSON is malformed or missing the
/// `quests` key.
///
/// [`Error::JsonError`]: crate::Error::JsonError
pub fn parse_quest_json(content: &str) -> Result<QuestDocument> {
    let doc: QuestDocument = serde_json::from_str(content)?;
    Ok(doc)
}

/// Resolves the progress string array for record `index`.
///
/// The array's byte length is not stored anywhere. It is inferred from
/// the distance to the next record's progress pointer when that pointer
/// is ahead of this one and inside the file; otherwise the array runs
/// to end of file. Trailing bytes short of a full 4-byte slot are
/// dropped.
fn read_progress(data: &[u8], records: &[RawRecord], index: usize) -> Vec<String> {
    let this_ptr = records[index].progress_ptr as usize;
    if this_ptr == 0 {
        return Vec::new();
    }

    let extent = match records.get(index + 1) {
        Some(next)
            if (next.progress_ptr as usize) > this_ptr
                && next.progress_ptr as usize <= data.len() =>
        {
            next.progress_ptr as usize - this_ptr
        }
        _ if this_ptr < data.len() => data.len() - this_ptr,
        _ => 0,
    };

    let count = extent / 4;
    let mut progress = Vec::with_capacity(count);
    for slot in 0..count {
        let slot_offset = this_ptr + slot * 4;
        if slot_offset + 4 > data.len() {
            break;
        }
        let ptr = u32::from_le_bytes([
            data[slot_offset],
            data[slot_offset + 1],
            data[slot_offset + 2],
            data[slot_offset + 3],
        ]);
        progress.push(text::read_cstring(data, ptr as usize));
    }
    progress
}

fn format_pointer(ptr: u32) -> String {
    format!("0x{ptr:08X}")
}

fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Builds an empty header region with every field zeroed.
    fn blank_table() -> Vec<u8> {
        vec![0u8; HEADER_SIZE]
    }

    fn set_u32(data: &mut [u8], offset: usize, value: u32) {
        data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_too_short_input_is_rejected() {
        let err = parse_quest_bytes(&[0u8; 100]).unwrap_err();
        assert!(matches!(
            err,
            Error::QuestTableTooSmall { needed, found } if needed == HEADER_SIZE && found == 100
        ));
    }

    #[test]
    fn test_header_only_table_decodes_empty() {
        let doc = parse_quest_bytes(&blank_table()).unwrap();
        assert_eq!(doc.quests.len(), ENTRY_COUNT);
        assert_eq!(doc.metadata.file_size, HEADER_SIZE);
        for entry in &doc.quests {
            assert_eq!(entry.name, "");
            assert_eq!(entry.client, "");
            assert_eq!(entry.description, "");
            assert!(entry.progress.is_empty());
        }
    }

    #[test]
    fn test_resolves_text_pointers() {
        let mut data = blank_table();
        data[0] = 7; // counter of record 0
        data[1] = 0xAA; // first reserved byte
        let name_offset = data.len() as u32;
        data.extend_from_slice(b"Search Request\0");
        set_u32(&mut data, 12, name_offset);

        let doc = parse_quest_bytes(&data).unwrap();
        let entry = &doc.quests[0];
        assert_eq!(entry.counter, 7);
        assert_eq!(entry.reserved[0], 0xAA);
        assert_eq!(entry.reserved_hex, "aa 00 00 00 00 00 00 00 00 00 00");
        assert_eq!(entry.name, "Search Request");
        assert_eq!(entry.pointers.name_ptr, format!("0x{name_offset:08X}"));
        assert_eq!(entry.pointers.client_ptr, "0x00000000");
    }

    #[test]
    fn test_out_of_bounds_pointer_degrades_to_empty() {
        let mut data = blank_table();
        set_u32(&mut data, 12, 0x00FF_FFFF);
        let doc = parse_quest_bytes(&data).unwrap();
        assert_eq!(doc.quests[0].name, "");
    }

    #[test]
    fn test_progress_extent_from_next_record() {
        let mut data = blank_table();
        // Two strings, then two one-slot arrays back to back.
        let s0 = data.len() as u32;
        data.extend_from_slice(b"step A\0");
        let s1 = data.len() as u32;
        data.extend_from_slice(b"step B\0");
        let array0 = data.len() as u32;
        data.extend_from_slice(&s0.to_le_bytes());
        let array1 = data.len() as u32;
        data.extend_from_slice(&s1.to_le_bytes());
        set_u32(&mut data, 24, array0);
        set_u32(&mut data, ENTRY_SIZE + 24, array1);

        let doc = parse_quest_bytes(&data).unwrap();
        assert_eq!(doc.quests[0].progress, vec!["step A"]);
        assert_eq!(doc.quests[1].progress, vec!["step B"]);
    }

    #[test]
    fn test_progress_extent_to_end_of_file_drops_partial_slot() {
        let mut data = blank_table();
        let s0 = data.len() as u32;
        data.extend_from_slice(b"only step\0");
        let array = data.len() as u32;
        data.extend_from_slice(&s0.to_le_bytes());
        // Three stray bytes short of a full slot.
        data.extend_from_slice(&[1, 2, 3]);
        set_u32(&mut data, 24, array);

        let doc = parse_quest_bytes(&data).unwrap();
        assert_eq!(doc.quests[0].progress, vec!["only step"]);
    }

    #[test]
    fn test_progress_pointer_past_eof_yields_empty() {
        let mut data = blank_table();
        set_u32(&mut data, 24, 0x0010_0000);
        let doc = parse_quest_bytes(&data).unwrap();
        assert!(doc.quests[0].progress.is_empty());
    }

    #[test]
    fn test_progress_slot_with_bad_pointer_degrades() {
        let mut data = blank_table();
        let array = data.len() as u32;
        data.extend_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        set_u32(&mut data, 24, array);

        let doc = parse_quest_bytes(&data).unwrap();
        assert_eq!(doc.quests[0].progress, vec![String::new()]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_quest_json("{\"quests\": [").unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_json_without_quests_key_is_rejected() {
        let err = parse_quest_json("{}").unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }
}
