//! Error handling and display for the CLI.

use colored::Colorize;
use natid_codec::{GenerateError, ValidationError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} identifiers failed validation")]
    InvalidIdentifiers { invalid: usize, total: usize },

    #[error("Invalid identifier: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot generate identifier: {0}")]
    Generate(#[from] GenerateError),

    #[error("Config file already exists at {0}")]
    ConfigExists(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Validation(ValidationError::InvalidFormat { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Identifiers are 13 digits; spaces and hyphens are ignored.".yellow()
                );
            }
            CliError::Validation(ValidationError::InvalidDay { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: --strict also rejects days past the end of the month.".yellow()
                );
            }
            CliError::ConfigExists(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --force to overwrite the existing config.".yellow()
                );
            }
            _ => {}
        }
    }
}
