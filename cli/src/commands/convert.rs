use anyhow::Context;
use ipconv_common::config::Config;
use ipconv_core::{ConversionResult, Operation};

use crate::terminal::format;

pub fn convert(operation: Operation, input: &str, cfg: &Config) -> anyhow::Result<()> {
    let result: ConversionResult<String> = operation.apply(input);

    format::show_result(operation.output_label(), &result, cfg);

    result
        .map(|_| ())
        .with_context(|| format!("{} failed for '{}'", operation.title(), input.trim()))
}
