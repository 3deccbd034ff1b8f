//! Validation pipeline: normalize, structural check, extract, date check, checksum.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::checksum::check_digit;
use crate::error::ValidationError;
use crate::fields::{IdentityFields, ValidatedFields};
use crate::layout::{self, RawFields};
use crate::normalize::normalize;

/// How strictly the birth date components are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Month in 1-12 and day in 1-31, nothing more. A 31st of a 30-day month passes.
    #[default]
    Lax,
    /// Additionally requires the day to exist in that month, in 19yy or 20yy.
    Strict,
}

/// Validates a raw identifier in [`ValidationMode::Lax`].
///
/// Spaces and hyphens anywhere in `raw` are ignored.
pub fn validate(raw: &str) -> Result<ValidatedFields, ValidationError> {
    validate_with(raw, ValidationMode::Lax)
}

/// Validates a raw identifier with the given mode.
///
/// Stages run in a fixed order and the first failure is returned.
pub fn validate_with(raw: &str, mode: ValidationMode) -> Result<ValidatedFields, ValidationError> {
    let result = run(raw, mode);
    match &result {
        Ok(_) => tracing::trace!(?mode, "identifier valid"),
        // The digits themselves are personal data and stay out of the logs.
        Err(e) => tracing::debug!(?mode, kind = %e.kind(), "identifier rejected"),
    }
    result
}

fn run(raw: &str, mode: ValidationMode) -> Result<ValidatedFields, ValidationError> {
    let normalized = normalize(raw);
    let digits = layout::to_digits(&normalized)?;
    let raw_fields = layout::extract(&digits);

    check_date(&raw_fields, mode)?;

    let expected = check_digit(&layout::payload(&digits));
    if expected != raw_fields.check {
        return Err(ValidationError::ChecksumMismatch {
            expected,
            actual: raw_fields.check,
        });
    }

    let identity = IdentityFields {
        year: raw_fields.year,
        month: raw_fields.month,
        day: raw_fields.day,
        sequence: raw_fields.sequence,
        citizenship: raw_fields.citizenship,
        filler: raw_fields.filler,
    };
    Ok(ValidatedFields::new(identity, raw_fields.check))
}

fn check_date(fields: &RawFields, mode: ValidationMode) -> Result<(), ValidationError> {
    if !(1..=12).contains(&fields.month) {
        return Err(ValidationError::InvalidMonth {
            month: fields.month,
        });
    }
    if !(1..=31).contains(&fields.day) {
        return Err(ValidationError::InvalidDay { day: fields.day });
    }

    if mode == ValidationMode::Strict && !exists_in_either_century(fields) {
        return Err(ValidationError::InvalidDay { day: fields.day });
    }

    Ok(())
}

fn exists_in_either_century(fields: &RawFields) -> bool {
    let year = i32::from(fields.year);
    let month = u32::from(fields.month);
    let day = u32::from(fields.day);
    [1900, 2000]
        .iter()
        .any(|century| NaiveDate::from_ymd_opt(century + year, month, day).is_some())
}
