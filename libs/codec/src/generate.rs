//! Inverse of validation: build a checksum-valid identifier from its fields.

use crate::checksum::check_digit;
use crate::error::GenerateError;
use crate::fields::{IdentityFields, ValidatedFields};
use crate::id::NationalId;
use crate::layout::{Payload, PAYLOAD_LENGTH};

/// Generates the identifier for `fields`.
///
/// Each field is zero-padded to its width, the 12-digit payload is
/// concatenated and the check digit appended. The result always validates
/// back to the same fields.
///
/// # Errors
///
/// Returns [`GenerateError::OutOfRange`] for the first field that does not
/// fit: year 0-99, month 1-12, day 1-31, sequence 0-9999, citizenship and
/// filler 0-9.
pub fn generate(fields: &IdentityFields) -> Result<NationalId, GenerateError> {
    check_range("year", fields.year.into(), 0, 99)?;
    check_range("month", fields.month.into(), 1, 12)?;
    check_range("day", fields.day.into(), 1, 31)?;
    check_range("sequence", fields.sequence, 0, 9999)?;
    check_range("citizenship", fields.citizenship.into(), 0, 9)?;
    check_range("filler", fields.filler.into(), 0, 9)?;

    let payload_text = format!(
        "{:02}{:02}{:02}{:04}{}{}",
        fields.year, fields.month, fields.day, fields.sequence, fields.citizenship, fields.filler
    );
    debug_assert_eq!(payload_text.len(), PAYLOAD_LENGTH);

    let bytes = payload_text.as_bytes();
    let payload: Payload = std::array::from_fn(|i| bytes[i] - b'0');
    let check = check_digit(&payload);

    Ok(NationalId::from_parts(
        format!("{payload_text}{check}"),
        ValidatedFields::new(*fields, check),
    ))
}

fn check_range(field: &'static str, value: u16, min: u16, max: u16) -> Result<(), GenerateError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GenerateError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
