//! # Direct Binary/Decimal Codec
//!
//! Converts between bit strings of any length and unsigned integers, bypassing
//! [`crate::OctetList`].
//!
//! Unlike [`super::binary::parse`], this path does not care about grouping. Dots are
//! removed and the remaining bits are read as one number, so `"1.1"` is `3`. The result is
//! not clamped to 32 bits.

use num_bigint::BigUint;

use crate::error::{ConversionError, ConversionResult};

/// Reads every `0`/`1` in `input` (ignoring `.` separators) as one base-2 number.
pub fn bits_to_integer(input: &str) -> ConversionResult<BigUint> {
    let bits: String = input.trim().chars().filter(|c| *c != '.').collect();

    if let Some(character) = bits.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(ConversionError::InvalidBinaryDigit { character });
    }

    BigUint::parse_bytes(bits.as_bytes(), 2).ok_or(ConversionError::EmptyBinary)
}

/// Minimal base-2 rendering, `"0"` for zero.
pub fn integer_to_bits(value: &BigUint) -> String {
    value.to_str_radix(2)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
