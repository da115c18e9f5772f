//! Unsigned 32-bit decimal addresses. Octet 0 is the most significant byte.

use crate::error::{ConversionError, ConversionResult};
use crate::literal;
use crate::octets::OctetList;

impl From<OctetList> for u32 {
    fn from(octets: OctetList) -> Self {
        octets
            .octets()
            .iter()
            .enumerate()
            .fold(0, |acc, (i, octet)| acc | (u32::from(*octet) << (8 * (3 - i))))
    }
}

impl From<u32> for OctetList {
    fn from(value: u32) -> Self {
        let byte = |i: u32| ((value >> (8 * i)) & 0xFF) as u8;
        OctetList::new(byte(3), byte(2), byte(1), byte(0))
    }
}

/// Parses a base-10 integer in `0..=4294967295`.
///
/// Anything else fails with [`ConversionError::DecimalOutOfRange`]. That covers negative
/// numbers, values above `u32::MAX`, and text that is not an integer at all.
pub fn parse(input: &str) -> ConversionResult<OctetList> {
    let trimmed: &str = input.trim();
    let out_of_range = || ConversionError::DecimalOutOfRange {
        input: trimmed.to_string(),
    };

    let value: i64 = literal::parse_integer(trimmed).map_err(|_| out_of_range())?;

    let value: u32 = u32::try_from(value).map_err(|_| out_of_range())?;
    Ok(OctetList::from(value))
}

pub fn format(octets: &OctetList) -> String {
    u32::from(*octets).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
