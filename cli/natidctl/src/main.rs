//! natidctl (natid) - CLI for national identity numbers
//!
//! Validates, decodes, and generates identifiers, and emits seeded fixtures
//! for test data. Never contacts a network service.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
