//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{print_json, print_pairs, print_success, OutputFormat};

use super::CommandContext;

/// Show or initialize the config file.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Print the config file path.
    Path,

    /// Write a config file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
struct ConfigView<'a> {
    path: String,
    exists: bool,
    mode: natid_codec::ValidationMode,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Path => {
                println!("{}", ctx.resolve_config_path()?.display());
                Ok(())
            }
            ConfigSubcommand::Init { force } => init(ctx, force),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let path = ctx.resolve_config_path()?;
    let view = ConfigView {
        path: path.display().to_string(),
        exists: path.exists(),
        mode: ctx.mode,
        config: &ctx.config,
    };

    match ctx.format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Table => print_pairs(&[
            ("path", view.path.clone()),
            ("exists", view.exists.to_string()),
            ("strict", view.config.strict.to_string()),
            ("default_filler", view.config.default_filler.to_string()),
            ("log_level", view.config.log_level.clone()),
            (
                "reference_year",
                view.config
                    .reference_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "today".to_string()),
            ),
        ]),
    }

    Ok(())
}

fn init(ctx: CommandContext, force: bool) -> Result<()> {
    let path = ctx.resolve_config_path()?;
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path.display().to_string()).into());
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "config written");

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "ok": true, "path": path })),
        OutputFormat::Table => print_success(&format!("Wrote {}", path.display())),
    }

    Ok(())
}
