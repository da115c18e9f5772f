//! # Dotted Address Normalizer
//!
//! Lenient repair of partially specified dotted-decimal input.
//!
//! Missing trailing octets are filled with `"0"` and anything past the fourth token is
//! dropped. Token contents are left alone. The octet validator rejects bad tokens later.

/// Number of tokens in a complete dotted address.
pub const TOKEN_COUNT: usize = 4;

const FILLER: &str = "0";

/// Splits `input` into exactly four tokens, padding with `"0"` or truncating as needed.
///
/// Tokens borrow from `input`. This step never fails.
pub fn normalize_tokens(input: &str) -> [&str; TOKEN_COUNT] {
    let mut tokens: [&str; TOKEN_COUNT] = [FILLER; TOKEN_COUNT];

    for (slot, token) in tokens.iter_mut().zip(input.trim().split('.')) {
        *slot = token;
    }

    tokens
}

/// Normalizes a dotted address into a four-token dotted string.
///
/// * `"192.168.1"` becomes `"192.168.1.0"`.
/// * `"1.2.3.4.5"` becomes `"1.2.3.4"`.
pub fn normalize(input: &str) -> String {
    normalize_tokens(input).join(".")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
