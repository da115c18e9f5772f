//! # Conversion Errors
//!
//! Every parser and codec in this crate returns a [`ConversionResult`]. Malformed input is an
//! expected condition, so nothing here panics on bad input.

use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Why a conversion was rejected.
///
/// Each variant keeps the offending piece of input so the presentation layer can build its
/// own message. The `Display` implementation gives a sensible default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A dotted-address token is not a base-10 integer literal.
    #[error("the address contains a non-numeric token: '{token}'")]
    NonNumericToken { token: String },

    /// A dotted-address token parsed, but lies outside 0..=255.
    #[error("octet '{token}' is out of range, each octet must be between 0 and 255")]
    OctetOutOfRange { token: String },

    /// A binary address does not have exactly four groups.
    #[error("a binary address must contain 4 groups, found {found}")]
    WrongGroupCount { found: usize },

    /// A binary group is not exactly eight characters long.
    #[error("binary group '{group}' must be exactly 8 bits long")]
    WrongGroupLength { group: String },

    #[error("'{character}' is not a binary digit (0 or 1)")]
    InvalidBinaryDigit { character: char },

    #[error("'{character}' is not a hexadecimal digit")]
    InvalidHexDigit { character: char },

    /// Not an integer literal, or outside 0..=4294967295.
    #[error("decimal value '{input}' is not within 0 and 4294967295")]
    DecimalOutOfRange { input: String },

    /// Nothing left to convert once the separators are removed.
    #[error("the binary number contains no bits")]
    EmptyBinary,
}
