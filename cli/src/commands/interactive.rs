use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::*;
use ipconv_common::{config::Config, error, info};
use ipconv_core::{ConversionResult, Operation};

use crate::commands::list;
use crate::terminal::{colors, format, print};

const PROMPT: &str = "ipconv> ";

/// One line typed into the session.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Convert { operation: Operation, input: &'a str },
    List,
    Help,
    Copy,
    Reset,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> Line<'_> {
    let line: &str = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "" => Line::Empty,
        "list" | "ls" => Line::List,
        "help" | "?" => Line::Help,
        "copy" => Line::Copy,
        "reset" | "clear" => Line::Reset,
        "quit" | "exit" | "q" => Line::Quit,
        _ => match word.parse::<Operation>() {
            Ok(operation) => Line::Convert {
                operation,
                input: rest.trim(),
            },
            Err(e) => Line::Unknown(e),
        },
    }
}

/// The session's only state: the value of the last conversion, if it succeeded.
#[derive(Default)]
struct Session {
    last: Option<String>,
}

impl Session {
    fn handle(&mut self, operation: Operation, input: &str, cfg: &Config) {
        let result: ConversionResult<String> = operation.apply(input);
        print::set_key_width([operation.output_label()]);
        format::show_result(operation.output_label(), &result, cfg);

        match result {
            Ok(value) => self.last = Some(value),
            Err(e) => {
                self.last = None;
                if cfg.is_quiet() {
                    error!("{e}");
                }
            }
        }
    }
}

pub fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session: Session = Session::default();

    if !cfg.is_quiet() {
        help();
    }

    loop {
        prompt()?;

        let mut buffer: String = String::new();
        let read: usize = stdin
            .lock()
            .read_line(&mut buffer)
            .context("failed to read from stdin")?;
        if read == 0 {
            break;
        }

        match parse_line(&buffer) {
            Line::Convert { operation, input } => session.handle(operation, input, cfg),
            Line::List => list::list(cfg),
            Line::Help => help(),
            Line::Copy => match &session.last {
                Some(value) => println!("{value}"),
                None => info!("Nothing to copy yet"),
            },
            Line::Reset => {
                session.last = None;
                info!("Result cleared");
            }
            Line::Quit => break,
            Line::Empty => {}
            Line::Unknown(e) => error!("{e} (type 'help' for usage)"),
        }
    }

    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT.color(colors::ACCENT))?;
    stdout.flush()?;
    Ok(())
}

fn help() {
    print::print_status("<operation> <input>  convert, e.g. 'ip_to_hex 192.168.1.1'");
    print::print_status("list                 show the operations");
    print::print_status("copy                 print the last result on its own");
    print::print_status("reset                forget the last result");
    print::print_status("quit                 leave the session");
}
