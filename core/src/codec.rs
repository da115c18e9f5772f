//! # Spoke Codecs
//!
//! Parsers turn one textual representation into an [`crate::OctetList`], and formatters
//! turn an `OctetList` back into text. [`direct`] is the exception: it maps bit strings
//! straight to integers without touching the hub.

pub mod binary;
pub mod decimal;
pub mod direct;
pub mod hex;
