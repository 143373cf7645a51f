//! Command-line driver.
//!
//! Initializes logging, parses the command line and runs the requested simulation.

use std::error::Error;

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
