//! Bidifmt CLI - bidi-safe text wrapping from the command line

mod cli;
mod commands;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Wrap(args) => commands::wrap::run(&args),
        Commands::Inspect(args) => commands::inspect::run(&args),
        Commands::Batch(args) => commands::batch::run(&args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
