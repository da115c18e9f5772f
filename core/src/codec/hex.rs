//! Hexadecimal addresses, e.g. `0xC0A80101`.

use crate::error::{ConversionError, ConversionResult};
use crate::octets::OctetList;

const DIGITS: usize = 8;

/// Parses up to eight hex digits, with an optional leading `0x`/`0X`.
///
/// Short input is left-padded with `0`, so `0x1` is `0.0.0.1`. Only the first eight
/// characters after padding are read, so anything past them is ignored.
pub fn parse(input: &str) -> ConversionResult<OctetList> {
    let trimmed: &str = input.trim();
    let digits: &str = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let padded: String = format!("{digits:0>width$}", width = DIGITS);

    let value: u32 = padded.chars().take(DIGITS).try_fold(0u32, |acc, c| {
        c.to_digit(16)
            .map(|nibble| (acc << 4) | nibble)
            .ok_or(ConversionError::InvalidHexDigit { character: c })
    })?;

    Ok(OctetList::from(value))
}

/// Renders as `0x` followed by eight upper-case hex digits.
pub fn format(octets: &OctetList) -> String {
    let digits: String = octets
        .octets()
        .iter()
        .map(|octet| format!("{octet:02X}"))
        .collect();

    format!("0x{digits}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
