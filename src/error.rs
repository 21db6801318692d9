//! Error types for parsing and matching colors.

use thiserror::Error;

/// Errors produced when a string is not a `rrggbb` hex color.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Fewer than 6 characters were given.
    #[error("hex color too short: expected 6 digits, got {len}")]
    TooShort {
        /// The length of the rejected string in bytes.
        len: usize,
    },

    /// A character in the first 6 positions is not a hex digit.
    #[error("invalid hex digit at position {position}")]
    InvalidDigit {
        /// The byte offset of the offending character.
        position: usize,
    },
}

/// Errors produced by matching a color against a table.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The table to search holds no entries.
    #[error("cannot match against an empty color table")]
    EmptyTable,
}
