//! Main entry point for the unorm CLI.
//!
//! Renames files and directories so their names use one Unicode
//! normalization form. Run without arguments to see usage.

mod cli;
mod commands;
mod error;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Nothing to do: show usage and leave successfully
    if cli.normalize.patterns.is_empty() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!();
        std::process::exit(0);
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Initialize logging based on verbosity
    let logger = unorm::init_logger(global.verbose, global.quiet);
    if let Err(e) = logger.install() {
        eprintln!("WARN: logger already installed: {e}");
    }

    // Handle errors and set exit code
    match cli.normalize.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
