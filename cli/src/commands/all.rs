use ipconv_common::{config::Config, success, warn};
use ipconv_core::{ConversionResult, Format, Operation};

use crate::terminal::{format, print};

/// Runs the three conversions reading `source` on the same input.
pub fn all(source: Format, input: &str, cfg: &Config) -> anyhow::Result<()> {
    let operations: Vec<Operation> = Operation::from_source(source).collect();
    print::set_key_width(operations.iter().map(|op| op.output_label()));

    let mut succeeded: usize = 0;
    for op in &operations {
        let result: ConversionResult<String> = op.apply(input);
        format::show_result(op.output_label(), &result, cfg);

        match result {
            Ok(_) => succeeded += 1,
            Err(e) if cfg.is_quiet() => warn!("{}: {e}", op.title()),
            Err(_) => {}
        }
    }

    if succeeded == 0 {
        anyhow::bail!("'{}' could not be read as {}", input.trim(), source.label());
    }

    success!("{succeeded} of {} conversions succeeded", operations.len());
    Ok(())
}
