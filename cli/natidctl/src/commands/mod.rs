//! CLI commands.

mod config;
mod decode;
mod fixtures;
mod generate;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use natid_codec::ValidationMode;

use crate::config::Config;
use crate::output::OutputFormat;

/// natid - Validate, decode, and generate 13-digit national identity numbers.
#[derive(Debug, Parser)]
#[command(name = "natid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "NATID_FORMAT", default_value = "table")]
    format: String,

    /// Reject days that do not exist in the birth month.
    #[arg(long, global = true, env = "NATID_STRICT")]
    strict: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "NATID_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one or more identifiers.
    Validate(validate::ValidateCommand),

    /// Show the fields encoded in an identifier.
    Decode(decode::DecodeCommand),

    /// Generate an identifier from its fields.
    Generate(generate::GenerateCommand),

    /// Generate seeded test fixtures.
    Fixtures(fixtures::FixturesCommand),

    /// Show or initialize the config file.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = OutputFormat::from_flag(&self.format);
        let config = Config::load(self.config.as_deref())?;

        let log_level =
            config.effective_log_level(std::env::var(crate::config::LOG_LEVEL_ENV).ok());
        crate::logging::init(&log_level)?;
        tracing::debug!(?format, strict = self.strict, "configuration loaded");

        let ctx = CommandContext {
            mode: config.mode(self.strict),
            config_path: self.config,
            config,
            format,
        };

        match self.command {
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Fixtures(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("natid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub mode: ValidationMode,
}

impl CommandContext {
    /// The config file in effect, explicit or default.
    pub fn resolve_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => crate::config::default_path(),
        }
    }
}
