//! Base-10 integer literals as typed by a user.
//!
//! Accepts an optional sign and single `_` separators between digits (`1_000`). A separator
//! at either end, next to the sign, or doubled makes the literal invalid.

use std::num::ParseIntError;

/// Parses `literal` as an `i64`, allowing digit separators.
pub(crate) fn parse_integer(literal: &str) -> Result<i64, ParseIntError> {
    match strip_separators(literal) {
        Some(digits) => digits.parse(),
        None => literal.parse(),
    }
}

/// `None` when a separator is not surrounded by digits.
fn strip_separators(literal: &str) -> Option<String> {
    let bytes: &[u8] = literal.as_bytes();

    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'_' {
            continue;
        }
        let before: bool = i
            .checked_sub(1)
            .is_some_and(|j| bytes[j].is_ascii_digit());
        let after: bool = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(before && after) {
            return None;
        }
    }

    Some(literal.replace('_', ""))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
