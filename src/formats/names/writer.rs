//! Name table compilation and writing

use std::fs;
use std::io::Cursor;
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{NameTableDocument, RECORD_SIZE};
use crate::error::{Error, Result};
use crate::formats::common::BodyArena;
use crate::text;

/// Write a name table document to disk as a `._dt` binary
///
/// # Errors
///
/// Returns [`Error::NameOffsetOverflow`] if a string lands past the
/// 16-bit offset range, and [`Error::Io`] if the file cannot be
/// written.
///
/// [`Error::NameOffsetOverflow`]: crate::Error::NameOffsetOverflow
/// [`Error::Io`]: crate::Error::Io
pub fn write_names<P: AsRef<Path>>(path: P, doc: &NameTableDocument) -> Result<()> {
    let bytes = build_names_bytes(doc)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Compile a name table document into `._dt` bytes
///
/// The records region is sized from the character count; names are
/// allocated right behind it in record order, so the lowest name offset
/// is exactly the records region size and a re-decode recovers the same
/// strings region boundary.
///
/// # Errors
///
/// Returns [`Error::NameOffsetOverflow`] if a string lands past the
/// 16-bit offset range of the record field.
///
/// [`Error::NameOffsetOverflow`]: crate::Error::NameOffsetOverflow
pub fn build_names_bytes(doc: &NameTableDocument) -> Result<Vec<u8>> {
    let records_size = doc.characters.len() * RECORD_SIZE;
    let mut arena = BodyArena::new(records_size);

    let mut name_offsets = Vec::with_capacity(doc.characters.len());
    for character in &doc.characters {
        let mut bytes = text::encode_field(&character.name)?;
        bytes.push(0);
        let offset = arena.allocate(&bytes);
        let offset = u16::try_from(offset).map_err(|_| Error::NameOffsetOverflow {
            offset: offset as usize,
        })?;
        name_offsets.push(offset);
    }

    let mut records = Cursor::new(Vec::with_capacity(records_size + arena.len()));
    for (character, &name_offset) in doc.characters.iter().zip(&name_offsets) {
        records.write_u16::<LittleEndian>(character.id)?;
        records.write_u16::<LittleEndian>(name_offset)?;
        for &field in &character.fields {
            records.write_u16::<LittleEndian>(field)?;
        }
    }

    let mut output = records.into_inner();
    output.extend_from_slice(&arena.into_bytes());
    tracing::debug!(
        "Compiled {} character records into {} bytes",
        doc.characters.len(),
        output.len()
    );
    Ok(output)
}

/// Render a name table document as pretty JSON with the given indent width
///
/// The returned string carries a trailing newline.
///
/// # Errors
///
/// Returns [`Error::JsonError`] if JSON serialization fails.
///
/// [`Error::JsonError`]: crate::Error::JsonError
pub fn serialize_names_json(doc: &NameTableDocument, indent: usize) -> Result<String> {
    crate::formats::common::json::to_pretty_json(doc, indent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::{CharacterEntry, FIELD_COUNT, NameTableInfo, parse_names_bytes};
    use super::*;

    fn character(id: u16, name: &str) -> CharacterEntry {
        CharacterEntry {
            id,
            name: name.to_string(),
            fields: [0; FIELD_COUNT],
        }
    }

    fn document(characters: Vec<CharacterEntry>) -> NameTableDocument {
        NameTableDocument {
            file_info: NameTableInfo::default(),
            characters,
        }
    }

    #[test]
    fn test_layout_places_strings_behind_records() {
        let doc = document(vec![character(1, "Lloyd"), character(2, "Elie")]);
        let bytes = build_names_bytes(&doc).unwrap();
        assert_eq!(bytes.len(), 2 * RECORD_SIZE + 6 + 5);
        // Record 0 name offset points at the first string.
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 40);
        assert_eq!(&bytes[40..46], b"Lloyd\0");
        // Record 1 follows right behind.
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 46);
        assert_eq!(&bytes[46..51], b"Elie\0");
    }

    #[test]
    fn test_duplicate_names_are_not_deduplicated() {
        let doc = document(vec![character(1, "Tio"), character(2, "Tio")]);
        let bytes = build_names_bytes(&doc).unwrap();
        assert_eq!(bytes.len(), 2 * RECORD_SIZE + 2 * 4);
    }

    #[test]
    fn test_round_trip_preserves_characters() {
        let mut randy = character(3, "ランディ");
        randy.fields = [7, 0, 0, 0, 0, 0, 0, 1];
        let doc = document(vec![character(1, "Lloyd"), character(2, ""), randy]);

        let decoded = parse_names_bytes(&build_names_bytes(&doc).unwrap());
        assert_eq!(decoded.characters.len(), 3);
        for (before, after) in doc.characters.iter().zip(&decoded.characters) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.name, after.name);
            assert_eq!(before.fields, after.fields);
        }
    }

    #[test]
    fn test_empty_document_compiles_to_empty_file() {
        let bytes = build_names_bytes(&document(Vec::new())).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_offset_overflow_is_rejected() {
        // 3277 records put the first string at 65540, past u16 range.
        let characters = (0..3277).map(|i| character(i as u16, "")).collect();
        let err = build_names_bytes(&document(characters)).unwrap_err();
        assert!(matches!(err, Error::NameOffsetOverflow { offset } if offset == 65540));
    }
}
