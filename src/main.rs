//! Baler - packaging tool
//!
//! A command line tool that maintains a tool-managed internal copy of the
//! user's bale manifest, with selected metadata fields overridden at build or
//! publish time.

use clap::Parser;

mod cli;
mod commands;
mod editor;
mod error;
mod manifest;
mod operations;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
