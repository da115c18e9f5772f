pub mod all;
pub mod batch;
pub mod convert;
pub mod interactive;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ipconv_common::config::Config;
use ipconv_core::{Format, Operation};

#[derive(Parser, Debug)]
#[command(name = "ipconv")]
#[command(version, about = "Convert IPv4 addresses between dotted, binary, hex and decimal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print bare results (-q) or only errors (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single conversion, e.g. `convert ip_to_hex 192.168.1.1`
    #[command(alias = "c")]
    Convert {
        operation: Operation,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Run every conversion that reads the given format
    #[command(alias = "a")]
    All {
        format: Format,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// List the available operations
    #[command(alias = "l")]
    List,
    /// Convert every line of a file (or stdin) in parallel
    #[command(alias = "b")]
    Batch {
        operation: Operation,
        file: Option<PathBuf>,
    },
    /// Start a line-oriented conversion session
    #[command(alias = "i")]
    Interactive,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
