//! File format handlers for the Falcom `._dt` tables

pub mod common;
pub mod names;
pub mod quest;

// Re-export shared encoding machinery
pub use common::BodyArena;

// Re-export main document types
pub use names::{CharacterEntry, NameTableDocument, NameTableInfo};
pub use names::{parse_names_bytes, parse_names_json, read_names, serialize_names_json, write_names};
pub use quest::{QuestDocument, QuestEntry, QuestMetadata, QuestPointers};
pub use quest::{parse_quest_bytes, parse_quest_json, read_quest, serialize_quest_json, write_quest};
