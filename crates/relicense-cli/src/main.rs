//! relicense: recursive license header rewriter

use anyhow::Result;
use clap::Parser;

use relicense_cli::commands;
use relicense_cli::{setup_logging, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Change {
            path,
            license,
            languages,
            name,
            copyright,
            list,
        } => commands::change::run(
            &path,
            &license,
            &languages,
            &name,
            &copyright,
            cli.verbose,
            list,
        ),
        Commands::Languages => commands::languages::run(),
    }
}
