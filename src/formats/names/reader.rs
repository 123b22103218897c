//! Name table reading and decompilation

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{
    CharacterEntry, DEFAULT_STRINGS_OFFSET, FIELD_COUNT, NameTableDocument, NameTableInfo,
    RECORD_SCAN_LIMIT, RECORD_SIZE,
};
use crate::error::Result;
use crate::text;

struct RawRecord {
    id: u16,
    name_offset: u16,
    fields: [u16; FIELD_COUNT],
}

/// Read a character name table file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_names<P: AsRef<Path>>(path: P) -> Result<NameTableDocument> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(parse_names_bytes(&buffer))
}

/// Parse character name table data from bytes
///
/// Never fails: a truncated or empty input simply yields fewer (or no)
/// records.
pub fn parse_names_bytes(data: &[u8]) -> NameTableDocument {
    let strings_start = find_strings_start(data);

    let mut characters = Vec::new();
    let mut offset = 0;
    while offset < strings_start {
        let Some(record) = read_record(data, offset) else {
            break;
        };
        characters.push(CharacterEntry {
            id: record.id,
            name: text::read_cstring(data, record.name_offset as usize),
            fields: record.fields,
        });
        offset += RECORD_SIZE;
    }

    tracing::debug!(
        "Decoded {} character records, strings region at {:#x}",
        characters.len(),
        strings_start
    );

    NameTableDocument {
        file_info: NameTableInfo {
            original_size: data.len(),
            encoding: text::ENCODING_NAME.to_string(),
            record_size: RECORD_SIZE,
            strings_section_start: strings_start,
        },
        characters,
    }
}

/// Parse a name table document from its JSON text form
///
/// # Errors
///
/// Returns [`Error::JsonError`] if the JSON is malformed or missing the
/// `characters` key.
///
/// [`Error::JsonError`]: crate::Error::JsonError
pub fn parse_names_json(content: &str) -> Result<NameTableDocument> {
    let doc: NameTableDocument = serde_json::from_str(content)?;
    Ok(doc)
}

/// Locates the strings region start.
///
/// The format does not store it; scan the record area for the lowest
/// non-zero name offset, giving up past [`RECORD_SCAN_LIMIT`]. Falls
/// back to [`DEFAULT_STRINGS_OFFSET`] when no record names an offset.
fn find_strings_start(data: &[u8]) -> usize {
    let mut min_offset = data.len();
    let mut offset = 0;
    while offset + RECORD_SIZE < data.len() {
        let name_offset = read_u16_at(data, offset + 2) as usize;
        if name_offset > 0 && name_offset < min_offset {
            min_offset = name_offset;
        }
        offset += RECORD_SIZE;
        if offset > RECORD_SCAN_LIMIT {
            break;
        }
    }
    if min_offset < data.len() {
        min_offset
    } else {
        DEFAULT_STRINGS_OFFSET
    }
}

fn read_record(data: &[u8], offset: usize) -> Option<RawRecord> {
    if offset + RECORD_SIZE > data.len() {
        return None;
    }
    let mut fields = [0u16; FIELD_COUNT];
    for (i, field) in fields.iter_mut().enumerate() {
        *field = read_u16_at(data, offset + 4 + i * 2);
    }
    Some(RawRecord {
        id: read_u16_at(data, offset),
        name_offset: read_u16_at(data, offset + 2),
        fields,
    })
}

fn read_u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Two records followed by their strings region.
    fn two_record_table() -> Vec<u8> {
        let mut data = Vec::new();
        // Record 0: id 1, name at 40, fields 10..=17
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&40u16.to_le_bytes());
        for field in 10..18u16 {
            data.extend_from_slice(&field.to_le_bytes());
        }
        // Record 1: id 2, name at 48
        data.extend_from_slice(&2u16.to_le_bytes());
        data.extend_from_slice(&48u16.to_le_bytes());
        for field in 20..28u16 {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.extend_from_slice(b"Estelle\0Joshua\0");
        data
    }

    #[test]
    fn test_parses_records_up_to_strings_region() {
        let doc = parse_names_bytes(&two_record_table());
        assert_eq!(doc.file_info.strings_section_start, 40);
        assert_eq!(doc.characters.len(), 2);
        assert_eq!(doc.characters[0].id, 1);
        assert_eq!(doc.characters[0].name, "Estelle");
        assert_eq!(doc.characters[0].fields, [10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(doc.characters[1].name, "Joshua");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let doc = parse_names_bytes(&[]);
        assert!(doc.characters.is_empty());
        assert_eq!(doc.file_info.original_size, 0);
        assert_eq!(doc.file_info.strings_section_start, DEFAULT_STRINGS_OFFSET);
    }

    #[test]
    fn test_partial_trailing_record_is_dropped() {
        // Three nameless records, cut mid-way through the third.
        let mut data = Vec::new();
        for id in 1..=3u16 {
            data.extend_from_slice(&id.to_le_bytes());
            data.extend_from_slice(&[0; 18]);
        }
        data.truncate(50);

        let doc = parse_names_bytes(&data);
        assert_eq!(doc.characters.len(), 2);
        assert_eq!(doc.characters[0].id, 1);
        assert_eq!(doc.characters[1].id, 2);
    }

    #[test]
    fn test_zero_name_offset_degrades_to_empty() {
        let mut data = two_record_table();
        // Zero out record 1's name offset.
        data[RECORD_SIZE + 2] = 0;
        data[RECORD_SIZE + 3] = 0;
        let doc = parse_names_bytes(&data);
        assert_eq!(doc.characters[1].name, "");
    }

    #[test]
    fn test_out_of_bounds_name_offset_degrades_to_empty() {
        let mut data = two_record_table();
        data[2] = 0xFF;
        data[3] = 0xFF;
        let doc = parse_names_bytes(&data);
        // Offset 0xFFFF is past EOF; the strings region is then taken
        // from the other record's offset.
        assert_eq!(doc.characters[0].name, "");
        assert_eq!(doc.file_info.strings_section_start, 48);
    }

    #[test]
    fn test_json_without_characters_key_is_rejected() {
        let err = parse_names_json("{}").unwrap_err();
        assert!(matches!(err, crate::Error::JsonError(_)));
    }
}
