//! inthash - inspect and convert generation/hash identifiers.
//!
//! Reads identifiers in any of the shapes they travel in (canonical text,
//! JSON numbers, JSON strings) and prints every representation of the result.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let cli = Cli::parse();
    if let Err(e) = cli.run(&config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
