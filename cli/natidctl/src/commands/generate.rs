//! Generate command.

use anyhow::Result;
use clap::Args;
use natid_codec::{generate, IdentityFields, NationalId};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

use super::CommandContext;

/// Generate an identifier from its fields.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Two-digit birth year (0-99).
    #[arg(long)]
    year: u8,

    /// Birth month (1-12).
    #[arg(long)]
    month: u8,

    /// Birth day (1-31).
    #[arg(long)]
    day: u8,

    /// Sequence block (0-9999); 5000 and above is conventionally male.
    #[arg(long)]
    sequence: u16,

    /// Citizenship digit (0 citizen, 1 permanent resident).
    #[arg(long, default_value = "0")]
    citizenship: u8,

    /// Filler digit; defaults to the configured value.
    #[arg(long)]
    filler: Option<u8>,

    /// Print as `YYMMDD SSSS CAZ`.
    #[arg(long)]
    grouped: bool,
}

#[derive(Debug, Serialize)]
struct GeneratedView {
    id: NationalId,
    grouped: String,
    fields: IdentityFields,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let fields = self.fields(ctx.config.default_filler);
        let id = generate(&fields).map_err(CliError::from)?;
        tracing::debug!(sequence = fields.sequence, "identifier generated");

        match ctx.format {
            OutputFormat::Json => print_json(&GeneratedView {
                grouped: id.to_grouped(),
                id,
                fields,
            }),
            OutputFormat::Table => {
                if self.grouped {
                    println!("{}", id.to_grouped());
                } else {
                    println!("{id}");
                }
            }
        }

        Ok(())
    }

    fn fields(&self, default_filler: u8) -> IdentityFields {
        IdentityFields::new(
            self.year,
            self.month,
            self.day,
            self.sequence,
            self.citizenship,
        )
        .with_filler(self.filler.unwrap_or(default_filler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    #[test]
    fn parses_flags_and_applies_default_filler() {
        let harness = Harness::parse_from([
            "natid",
            "--year",
            "90",
            "--month",
            "1",
            "--day",
            "1",
            "--sequence",
            "5009",
        ]);
        let fields = harness.cmd.fields(8);
        assert_eq!(fields, IdentityFields::new(90, 1, 1, 5009, 0));
        assert_eq!(generate(&fields).unwrap().as_str(), "9001015009086");
    }

    #[test]
    fn explicit_filler_wins() {
        let harness = Harness::parse_from([
            "natid",
            "--year",
            "80",
            "--month",
            "1",
            "--day",
            "1",
            "--sequence",
            "4321",
            "--filler",
            "8",
        ]);
        assert_eq!(harness.cmd.fields(3).filler, 8);
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let harness = Harness::parse_from([
            "natid",
            "--year",
            "80",
            "--month",
            "13",
            "--day",
            "1",
            "--sequence",
            "4321",
        ]);
        assert!(generate(&harness.cmd.fields(8)).is_err());
    }
}
