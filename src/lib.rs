//! # zerodt
//!
//! A pure-Rust library for working with the Trails from Zero `._dt` data
//! tables used by localization projects.
//!
//! ## Supported Formats
//!
//! - **Quest tables** (`t_quest._dt`) - 80-slot quest log with titles,
//!   clients, descriptions, and step-by-step progress text
//! - **Name tables** (`t_name._dt`) - Character id to display-name records
//!
//! Both formats decompile to editable JSON documents and recompile to
//! byte-exact game binaries. Text travels through Shift-JIS with a
//! transliteration pass so Latin-script translations survive the trip.
//!
//! ## Quick Start
//!
//! ### Editing a Quest Table
//!
//! ```no_run
//! use zerodt::formats::{read_quest, write_quest};
//!
//! // Decompile the game binary into a document
//! let mut doc = read_quest("t_quest._dt")?;
//! println!("Found {} quests", doc.quests.len());
//!
//! // Edit in place and recompile
//! doc.quests[3].name = "The Hunt Begins".to_string();
//! write_quest("t_quest._dt", &doc)?;
//! # Ok::<(), zerodt::Error>(())
//! ```
//!
//! ### Reading Character Names
//!
//! ```no_run
//! use zerodt::formats::read_names;
//!
//! let table = read_names("t_name._dt")?;
//! for character in &table.characters {
//!     println!("{}: {}", character.id, character.name);
//! }
//! # Ok::<(), zerodt::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use zerodt::prelude::*;
//!
//! // Now you have access to:
//! // - QuestDocument, QuestEntry, NameTableDocument, CharacterEntry
//! // - read_quest, write_quest, read_names, write_names
//! // - decode_field, encode_field
//! // - Error, Result, and more
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `zerodt` command-line binary

pub mod error;
pub mod formats;
pub mod text;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::common::BodyArena;
    pub use crate::formats::names::{CharacterEntry, NameTableDocument, NameTableInfo};
    pub use crate::formats::names::{parse_names_bytes, parse_names_json, read_names, write_names};
    pub use crate::formats::quest::{QuestDocument, QuestEntry, QuestMetadata, QuestPointers};
    pub use crate::formats::quest::{parse_quest_bytes, parse_quest_json, read_quest, write_quest};
    pub use crate::text::{LINE_BREAK_TOKEN, decode_field, encode_field};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
