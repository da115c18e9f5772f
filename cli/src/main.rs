mod commands;
mod terminal;

use commands::{CommandLine, Commands, all, batch, convert, interactive, list};
use ipconv_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(&cfg);
    print::banner(&cfg);

    let outcome: anyhow::Result<()> = match commands.command {
        Commands::Convert { operation, input } => {
            print::header(&operation.title(), &cfg);
            convert::convert(operation, &input, &cfg)
        }
        Commands::All { format, input } => {
            print::header(&format!("from {}", format.label()), &cfg);
            all::all(format, &input, &cfg)
        }
        Commands::List => {
            print::header("operations", &cfg);
            list::list(&cfg);
            Ok(())
        }
        Commands::Batch { operation, file } => {
            print::header(&format!("batch {}", operation.title()), &cfg);
            batch::batch(operation, file.as_deref(), &cfg)
        }
        Commands::Interactive => {
            print::header("interactive session", &cfg);
            interactive::interactive(&cfg)
        }
    };

    print::end_of_program(&cfg);
    outcome
}
