//! Binary addresses: four dot-separated groups of exactly eight bits.

use crate::error::{ConversionError, ConversionResult};
use crate::normalize::TOKEN_COUNT;
use crate::octets::OctetList;

const GROUP_LEN: usize = 8;

/// Parses `11000000.10101000.00000001.00000001` style input.
///
/// Grouping is strict. There must be four groups of exactly eight `0`/`1` characters.
/// Each group's length is checked before its digits.
pub fn parse(input: &str) -> ConversionResult<OctetList> {
    let groups: Vec<&str> = input.trim().split('.').collect();
    if groups.len() != TOKEN_COUNT {
        return Err(ConversionError::WrongGroupCount {
            found: groups.len(),
        });
    }

    let mut octets: [u8; TOKEN_COUNT] = [0; TOKEN_COUNT];
    for (octet, group) in octets.iter_mut().zip(groups) {
        *octet = parse_group(group)?;
    }

    Ok(OctetList::from(octets))
}

fn parse_group(group: &str) -> ConversionResult<u8> {
    if group.chars().count() != GROUP_LEN {
        return Err(ConversionError::WrongGroupLength {
            group: group.to_string(),
        });
    }

    group.chars().try_fold(0u8, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(ConversionError::InvalidBinaryDigit { character: c }),
    })
}

/// Renders each octet as eight zero-padded bits, joined by `.`.
pub fn format(octets: &OctetList) -> String {
    octets
        .octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
