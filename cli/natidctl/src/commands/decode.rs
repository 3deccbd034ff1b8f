//! Decode command.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Args;
use natid_codec::{NationalId, Sex};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_json, print_pairs, OutputFormat};

use super::CommandContext;

/// Show the fields encoded in an identifier.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Identifier to decode.
    id: String,
}

#[derive(Debug, Serialize)]
struct DecodedView {
    id: String,
    grouped: String,
    year: u8,
    month: u8,
    day: u8,
    sequence: u16,
    citizenship: u8,
    filler: u8,
    check_digit: u8,
    sex: Sex,
    citizenship_status: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = NationalId::parse_with(&self.id, ctx.mode).map_err(CliError::from)?;
        let reference = ctx.config.reference_date(Utc::now().date_naive());
        let view = decode(&id, reference);

        match ctx.format {
            OutputFormat::Json => print_json(&view),
            OutputFormat::Table => print_pairs(&[
                ("id", view.id.clone()),
                ("grouped", view.grouped.clone()),
                (
                    "birth",
                    format!("{:02}-{:02}-{:02}", view.year, view.month, view.day),
                ),
                (
                    "birth date",
                    display_option(view.birth_date.map(|d| d.to_string())),
                ),
                ("sequence", format!("{:04}", view.sequence)),
                ("sex", view.sex.to_string()),
                (
                    "citizenship",
                    format!(
                        "{} ({})",
                        view.citizenship,
                        display_option(view.citizenship_status.clone())
                    ),
                ),
                ("filler", view.filler.to_string()),
                ("check digit", view.check_digit.to_string()),
            ]),
        }

        Ok(())
    }
}

fn decode(id: &NationalId, reference: NaiveDate) -> DecodedView {
    let fields = id.fields();
    DecodedView {
        id: id.to_string(),
        grouped: id.to_grouped(),
        year: fields.year(),
        month: fields.month(),
        day: fields.day(),
        sequence: fields.sequence(),
        citizenship: fields.citizenship(),
        filler: fields.filler(),
        check_digit: fields.check_digit(),
        sex: fields.sex(),
        citizenship_status: fields.citizenship_status().map(|c| c.to_string()),
        birth_date: fields.birth_date(reference),
    }
}

fn display_option(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_view() {
        let id = NationalId::parse("8001014321087").unwrap();
        let reference = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let view = decode(&id, reference);

        assert_eq!(view.grouped, "800101 4321 087");
        assert_eq!(view.sex, Sex::Female);
        assert_eq!(view.citizenship_status.as_deref(), Some("citizen"));
        assert_eq!(view.birth_date, NaiveDate::from_ymd_opt(1980, 1, 1));
        assert_eq!(view.check_digit, 7);
    }

    #[test]
    fn decode_view_json_shape() {
        let id = NationalId::parse("9001015009086").unwrap();
        let reference = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let json = serde_json::to_value(decode(&id, reference)).unwrap();

        assert_eq!(json["sex"], "male");
        assert_eq!(json["birth_date"], "1990-01-01");
        assert_eq!(json["sequence"], 5009);
    }
}
