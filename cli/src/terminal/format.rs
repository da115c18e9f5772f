use crate::terminal::{colors, print};
use colored::*;
use ipconv_common::config::Config;
use ipconv_core::{ConversionError, ConversionResult, Operation};

pub fn value(value: &str) -> ColoredString {
    value.color(colors::RESULT).bold()
}

pub fn failure(err: &ConversionError) -> ColoredString {
    format!("error: {err}").color(colors::FAILURE)
}

/// Prints one conversion outcome under `label`.
///
/// Quiet runs print the bare value, so the output can be piped. Failures are left to the caller.
pub fn show_result(label: &str, result: &ConversionResult<String>, cfg: &Config) {
    match (result, cfg.is_quiet()) {
        (Ok(v), true) => println!("{v}"),
        (Ok(v), false) => print::aligned_line(label, value(v)),
        (Err(e), false) => print::aligned_line(label, failure(e)),
        (Err(_), true) => {}
    }
}

/// Title and output label of an operation, e.g. `IP → Hexadecimal [Hexadecimal]`.
pub fn describe_operation(op: &Operation) -> String {
    format!("{} [{}]", op.title(), op.output_label())
}

/// Identifier and description of an operation, as shown by `ipconv list`.
pub fn operation_entry(op: &Operation) -> (String, ColoredString) {
    (op.id().to_string(), describe_operation(op).color(colors::ACCENT))
}
