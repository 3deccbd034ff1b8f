//! Validate command.

use anyhow::Result;
use clap::Args;
use natid_codec::{validate_with, ErrorKind};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_json, print_table, OutputFormat};

use super::CommandContext;

/// Validate identifiers; exits non-zero if any is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifiers to check. Quote grouped input such as "800101 4321 087".
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Status")]
    status: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Error")]
    error: String,
}

impl From<&ValidationReport> for ValidationRow {
    fn from(report: &ValidationReport) -> Self {
        Self {
            input: report.input.clone(),
            status: if report.valid { "valid" } else { "invalid" }.to_string(),
            kind: report
                .error
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_else(|| "-".to_string()),
            error: report.message.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let reports: Vec<ValidationReport> = self
            .ids
            .into_iter()
            .map(|input| check(input, &ctx))
            .collect();

        match ctx.format {
            OutputFormat::Json => print_json(&reports),
            OutputFormat::Table => {
                let rows: Vec<ValidationRow> = reports.iter().map(ValidationRow::from).collect();
                print_table(&rows);
            }
        }

        let invalid = reports.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidIdentifiers {
                invalid,
                total: reports.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn check(input: String, ctx: &CommandContext) -> ValidationReport {
    match validate_with(&input, ctx.mode) {
        Ok(_) => ValidationReport {
            input,
            valid: true,
            error: None,
            message: None,
        },
        Err(e) => ValidationReport {
            input,
            valid: false,
            error: Some(e.kind()),
            message: Some(e.to_string()),
        },
    }
}
