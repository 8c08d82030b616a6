use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use radix_cli::commands::{ascii, convert, eval, panels};
use radix_cli::{init_logging, load_config, repl};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Convert { value, from, json } => {
            convert::convert_command(&config, *from, value, *json)
        }
        Commands::Eval { expr, base } => eval::eval_command(*base, expr),
        Commands::Panels {
            value,
            widths,
            decode,
        } => panels::panels_command(&config, value, widths, *decode),
        Commands::Ascii { text, from } => ascii::ascii_command(text, *from),
        Commands::Repl => repl::run_repl(config),
    }
}
