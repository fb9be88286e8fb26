//! Modelzip CLI - Command-line utility for bundling feature-model files into
//! a zip archive and manifest.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Bundle(args) => {
            commands::bundle::execute(args, &*formatter, !(cli.quiet || cli.json))
        }
        cli::Commands::List(args) => commands::list::execute(args, &*formatter),
        cli::Commands::Locate(args) => commands::locate::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
