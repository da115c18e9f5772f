//! # Octet List
//!
//! The canonical hub representation: four bytes, most significant first.
//!
//! Every conversion except the direct binary/decimal path passes through an [`OctetList`].
//! Values are always in range by construction, so formatters never fail.

use std::fmt;
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

use crate::error::{ConversionError, ConversionResult};
use crate::literal;
use crate::normalize::{self, TOKEN_COUNT};

/// An IPv4 address as four octets in network order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OctetList([u8; TOKEN_COUNT]);

impl OctetList {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub const fn octets(&self) -> [u8; TOKEN_COUNT] {
        self.0
    }

    /// Validates four base-10 tokens into an `OctetList`.
    ///
    /// Every token is parsed before any is range-checked, so a non-numeric token is always
    /// reported ahead of an out-of-range one. Literals too large for an `i64` still count as
    /// numeric and fail the range check.
    pub fn from_tokens(tokens: [&str; TOKEN_COUNT]) -> ConversionResult<Self> {
        let mut values: [i64; TOKEN_COUNT] = [0; TOKEN_COUNT];
        for (value, token) in values.iter_mut().zip(tokens) {
            *value = parse_token(token)?;
        }

        let mut octets: [u8; TOKEN_COUNT] = [0; TOKEN_COUNT];
        for ((octet, value), token) in octets.iter_mut().zip(values).zip(tokens) {
            *octet = u8::try_from(value).map_err(|_| ConversionError::OctetOutOfRange {
                token: token.trim().to_string(),
            })?;
        }

        Ok(Self(octets))
    }

    /// Normalizes a dotted address, then validates it.
    pub fn from_dotted(input: &str) -> ConversionResult<Self> {
        Self::from_tokens(normalize::normalize_tokens(input))
    }
}

fn parse_token(token: &str) -> ConversionResult<i64> {
    let token: &str = token.trim();

    match literal::parse_integer(token) {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ConversionError::NonNumericToken {
                token: token.to_string(),
            }),
        },
    }
}

/// Dotted-decimal rendering, e.g. `192.168.1.1`.
impl fmt::Display for OctetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<[u8; TOKEN_COUNT]> for OctetList {
    fn from(octets: [u8; TOKEN_COUNT]) -> Self {
        Self(octets)
    }
}

impl From<Ipv4Addr> for OctetList {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<OctetList> for Ipv4Addr {
    fn from(octets: OctetList) -> Self {
        Ipv4Addr::from(octets.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
