//! # Conversion Dispatcher
//!
//! The twelve public operations, each composed from the codecs, plus a static command table
//! that a caller can use to look up an operation by identifier.
//!
//! Composition is check-and-propagate. If the first stage fails, its error is returned
//! unchanged and the second stage never runs.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::codec::{binary, decimal, direct, hex};
use crate::error::ConversionResult;
use crate::octets::OctetList;

/// One of the four textual representations of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Ip,
    Binary,
    Hex,
    Decimal,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Ip, Format::Binary, Format::Hex, Format::Decimal];

    pub fn id(&self) -> &'static str {
        match self {
            Format::Ip => "ip",
            Format::Binary => "binary",
            Format::Hex => "hex",
            Format::Decimal => "decimal",
        }
    }

    /// Human-readable name, used to label results.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Ip => "IP",
            Format::Binary => "Binary",
            Format::Hex => "Hexadecimal",
            Format::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Format {
    type Err = String;

    /// Accepts the identifier or the label, case-insensitive, plus `hexadecimal`/`dec`/`bin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ip" => Ok(Format::Ip),
            "binary" | "bin" => Ok(Format::Binary),
            "hex" | "hexadecimal" => Ok(Format::Hex),
            "decimal" | "dec" => Ok(Format::Decimal),
            _ => Err(format!("unknown format: {s}")),
        }
    }
}

/// A named conversion from one [`Format`] to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    IpToBinary,
    IpToHex,
    IpToDecimal,
    BinaryToIp,
    BinaryToHex,
    BinaryToDecimal,
    HexToBinary,
    HexToIp,
    HexToDecimal,
    DecimalToIp,
    DecimalToHex,
    DecimalToBinary,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::IpToBinary,
        Operation::IpToHex,
        Operation::IpToDecimal,
        Operation::BinaryToIp,
        Operation::BinaryToHex,
        Operation::BinaryToDecimal,
        Operation::HexToBinary,
        Operation::HexToIp,
        Operation::HexToDecimal,
        Operation::DecimalToIp,
        Operation::DecimalToHex,
        Operation::DecimalToBinary,
    ];

    /// Stable identifier, e.g. `ip_to_binary`.
    pub fn id(&self) -> &'static str {
        OPERATIONS[self.index()].0
    }

    pub fn source(&self) -> Format {
        match self {
            Operation::IpToBinary | Operation::IpToHex | Operation::IpToDecimal => Format::Ip,
            Operation::BinaryToIp | Operation::BinaryToHex | Operation::BinaryToDecimal => {
                Format::Binary
            }
            Operation::HexToBinary | Operation::HexToIp | Operation::HexToDecimal => Format::Hex,
            Operation::DecimalToIp | Operation::DecimalToHex | Operation::DecimalToBinary => {
                Format::Decimal
            }
        }
    }

    pub fn target(&self) -> Format {
        match self {
            Operation::BinaryToIp | Operation::HexToIp | Operation::DecimalToIp => Format::Ip,
            Operation::IpToBinary | Operation::HexToBinary | Operation::DecimalToBinary => {
                Format::Binary
            }
            Operation::IpToHex | Operation::BinaryToHex | Operation::DecimalToHex => Format::Hex,
            Operation::IpToDecimal | Operation::BinaryToDecimal | Operation::HexToDecimal => {
                Format::Decimal
            }
        }
    }

    /// e.g. `IP → Binary`
    pub fn title(&self) -> String {
        format!("{} → {}", self.source().label(), self.target().label())
    }

    /// Label for the produced value.
    pub fn output_label(&self) -> &'static str {
        self.target().label()
    }

    /// All operations reading `source`, in table order.
    pub fn from_source(source: Format) -> impl Iterator<Item = Operation> {
        Self::ALL.into_iter().filter(move |op| op.source() == source)
    }

    pub fn apply(&self, input: &str) -> ConversionResult<String> {
        debug!(operation = self.id(), input, "converting");
        let result: ConversionResult<String> = (OPERATIONS[self.index()].1)(input);

        if let Err(e) = &result {
            trace!(operation = self.id(), error = %e, "conversion rejected");
        }

        result
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Parses an identifier such as `hex_to_ip`. Dashes are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().to_ascii_lowercase().replace('-', "_");

        Operation::ALL
            .into_iter()
            .find(|op| op.id() == wanted)
            .ok_or_else(|| format!("unknown operation: {s}"))
    }
}

/// A conversion entry point: raw input in, rendered output or error out.
pub type Converter = fn(&str) -> ConversionResult<String>;

/// The command table. Entries follow the declaration order of [`Operation`].
pub static OPERATIONS: [(&str, Converter); 12] = [
    ("ip_to_binary", ip_to_binary),
    ("ip_to_hex", ip_to_hex),
    ("ip_to_decimal", ip_to_decimal),
    ("binary_to_ip", binary_to_ip),
    ("binary_to_hex", binary_to_hex),
    ("binary_to_decimal", binary_to_decimal),
    ("hex_to_binary", hex_to_binary),
    ("hex_to_ip", hex_to_ip),
    ("hex_to_decimal", hex_to_decimal),
    ("decimal_to_ip", decimal_to_ip),
    ("decimal_to_hex", decimal_to_hex),
    ("decimal_to_binary", decimal_to_binary),
];

pub fn ip_to_binary(input: &str) -> ConversionResult<String> {
    OctetList::from_dotted(input).map(|octets| binary::format(&octets))
}

pub fn ip_to_hex(input: &str) -> ConversionResult<String> {
    OctetList::from_dotted(input).map(|octets| hex::format(&octets))
}

pub fn ip_to_decimal(input: &str) -> ConversionResult<String> {
    OctetList::from_dotted(input).map(|octets| decimal::format(&octets))
}

pub fn binary_to_ip(input: &str) -> ConversionResult<String> {
    binary::parse(input).map(|octets| octets.to_string())
}

pub fn binary_to_hex(input: &str) -> ConversionResult<String> {
    let ip: String = binary_to_ip(input)?;
    ip_to_hex(&ip)
}

/// Goes through the direct codec, not the octet hub. See [`direct`].
pub fn binary_to_decimal(input: &str) -> ConversionResult<String> {
    direct::bits_to_integer(input).map(|value| value.to_string())
}

pub fn hex_to_binary(input: &str) -> ConversionResult<String> {
    let ip: String = hex_to_ip(input)?;
    ip_to_binary(&ip)
}

pub fn hex_to_ip(input: &str) -> ConversionResult<String> {
    hex::parse(input).map(|octets| octets.to_string())
}

pub fn hex_to_decimal(input: &str) -> ConversionResult<String> {
    let ip: String = hex_to_ip(input)?;
    ip_to_decimal(&ip)
}

pub fn decimal_to_ip(input: &str) -> ConversionResult<String> {
    decimal::parse(input).map(|octets| octets.to_string())
}

pub fn decimal_to_hex(input: &str) -> ConversionResult<String> {
    let ip: String = decimal_to_ip(input)?;
    ip_to_hex(&ip)
}

pub fn decimal_to_binary(input: &str) -> ConversionResult<String> {
    let ip: String = decimal_to_ip(input)?;
    ip_to_binary(&ip)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
