//! Cross-crate tests for the conversion engine.

mod conversion;
