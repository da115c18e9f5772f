use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ipconv_common::{config::Config, success, warn};
use ipconv_core::{ConversionResult, Operation};
use rayon::prelude::*;

use crate::terminal::{colors, format, print};

/// Converts each non-empty line of `file` (stdin when absent) and prints the results in order.
pub fn batch(operation: Operation, file: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let text: String = read_input(file)?;
    let inputs: Vec<&str> = collect_inputs(&text);

    if inputs.is_empty() {
        warn!("Nothing to convert");
        return Ok(());
    }

    let start_time: Instant = Instant::now();
    let results: Vec<ConversionResult<String>> = convert_all(operation, &inputs);
    let elapsed: Duration = start_time.elapsed();

    print::set_key_width(inputs.iter().copied());
    for (input, result) in inputs.iter().zip(&results) {
        format::show_result(input, result, cfg);
        if let (Err(e), true) = (result, cfg.is_quiet()) {
            warn!("{input}: {e}");
        }
    }

    let failed: usize = results.iter().filter(|r| r.is_err()).count();
    print_summary(inputs.len() - failed, failed, elapsed, cfg);

    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs could not be converted", inputs.len());
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

fn collect_inputs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Results keep the order of `inputs`.
fn convert_all(operation: Operation, inputs: &[&str]) -> Vec<ConversionResult<String>> {
    inputs.par_iter().map(|input| operation.apply(input)).collect()
}

fn print_summary(converted: usize, failed: usize, total_time: Duration, cfg: &Config) {
    if cfg.is_quiet() {
        return;
    }

    let converted: ColoredString = format!("{converted} converted").bold().green();
    let failed: ColoredString = if failed == 0 {
        "no failures".normal()
    } else {
        format!("{failed} failed").bold().red()
    };
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    let output: String = format!("Batch Complete: {converted}, {failed} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
    success!("Batch finished");
}
