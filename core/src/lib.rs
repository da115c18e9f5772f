//! # IPv4 Conversion Core
//!
//! `ipconv-core` converts an IPv4 address between four textual representations
//! and validates malformed input in every direction.
//!
//! ## Architecture Overview
//! Every conversion routes through a single hub type, [`OctetList`]:
//!
//! * **[`normalize`]**: Pads or truncates a dotted address to exactly four tokens.
//! * **[`octets`]**: The hub type and the octet validator.
//! * **[`codec`]**: Spoke parsers and formatters (binary, hexadecimal, decimal),
//!   plus the direct binary/decimal path that bypasses the hub.
//! * **[`dispatch`]**: The twelve public operations and the command table.
//! * **[`error`]**: Tagged conversion errors.
//!
//! All functions are pure and synchronous. They hold no shared state, so any of them
//! may be called from any number of threads at once.

pub mod codec;
pub mod dispatch;
pub mod error;
mod literal;
pub mod normalize;
pub mod octets;

pub use dispatch::{
    Format, OPERATIONS, Operation, binary_to_decimal, binary_to_hex, binary_to_ip,
    decimal_to_binary, decimal_to_hex, decimal_to_ip, hex_to_binary, hex_to_decimal, hex_to_ip,
    ip_to_binary, ip_to_decimal, ip_to_hex,
};
pub use error::{ConversionError, ConversionResult};
pub use normalize::normalize;
pub use octets::OctetList;
