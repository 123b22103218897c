//! Error types for `zerodt`

use thiserror::Error;

/// The error type for `zerodt` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Quest Table Errors ====================
    /// The file is too short to hold the fixed quest header table.
    #[error("quest table too small: need at least {needed} bytes, found {found}")]
    QuestTableTooSmall {
        /// Minimum size of the header region in bytes.
        needed: usize,
        /// Actual size of the input in bytes.
        found: usize,
    },

    /// The document does not carry exactly the fixed number of quest entries.
    #[error("quest document must contain exactly {expected} entries, found {found}")]
    QuestCountMismatch {
        /// The fixed entry count of the format.
        expected: usize,
        /// Number of entries in the document.
        found: usize,
    },

    /// A quest entry's index falls outside the fixed header table.
    #[error("quest index {index} out of range (table holds {count} records)")]
    QuestIndexOutOfRange {
        /// The offending index value.
        index: usize,
        /// The fixed entry count of the format.
        count: usize,
    },

    // ==================== Name Table Errors ====================
    /// A string landed past the 16-bit offset range of a name record.
    #[error("name string offset {offset:#x} does not fit the 16-bit record field")]
    NameOffsetOverflow {
        /// The absolute file offset that overflowed.
        offset: usize,
    },

    // ==================== Text Encoding Errors ====================
    /// A substitution rule produced replacement text that Shift-JIS cannot encode.
    #[error("substitution for {ch:?} produced unencodable text {replacement:?}")]
    UnencodableSubstitution {
        /// The character the rule applies to.
        ch: char,
        /// The replacement text that failed to encode.
        replacement: String,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for `zerodt` operations.
pub type Result<T> = std::result::Result<T, Error>;
