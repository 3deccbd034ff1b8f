//! Fixed-width field layout of the identifier.
//!
//! Fields are located purely by offset; nothing is delimiter-scanned.

use std::ops::Range;

use crate::error::ValidationError;

/// Total number of digits in an identifier.
pub const ID_LENGTH: usize = 13;

/// Number of digits covered by the check digit.
pub const PAYLOAD_LENGTH: usize = 12;

pub(crate) const YEAR: Range<usize> = 0..2;
pub(crate) const MONTH: Range<usize> = 2..4;
pub(crate) const DAY: Range<usize> = 4..6;
pub(crate) const SEQUENCE: Range<usize> = 6..10;
pub(crate) const CITIZENSHIP: usize = 10;
pub(crate) const FILLER: usize = 11;
pub(crate) const CHECK: usize = 12;

/// Decimal digit values of a structurally valid identifier.
pub(crate) type Digits = [u8; ID_LENGTH];

/// Decimal digit values of the checksummed prefix.
pub(crate) type Payload = [u8; PAYLOAD_LENGTH];

/// Raw field values as read from the digit positions, before any bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFields {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub sequence: u16,
    pub citizenship: u8,
    pub filler: u8,
    pub check: u8,
}

/// Structural check: exactly 13 ASCII decimal digits.
pub(crate) fn to_digits(normalized: &str) -> Result<Digits, ValidationError> {
    let length = normalized.chars().count();
    if length != ID_LENGTH {
        return Err(ValidationError::format(format!(
            "expected {ID_LENGTH} digits, got {length} characters"
        )));
    }

    let mut digits = [0u8; ID_LENGTH];
    for (position, c) in normalized.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(ValidationError::format(format!(
                "unexpected character {c:?} at position {position}"
            )));
        }
        digits[position] = c as u8 - b'0';
    }

    Ok(digits)
}

/// Slices a digit array into its fields. Total; performs no validation.
pub(crate) fn extract(digits: &Digits) -> RawFields {
    RawFields {
        // Two digits never exceed 99, so the narrowing casts are lossless.
        year: number(&digits[YEAR]) as u8,
        month: number(&digits[MONTH]) as u8,
        day: number(&digits[DAY]) as u8,
        sequence: number(&digits[SEQUENCE]),
        citizenship: digits[CITIZENSHIP],
        filler: digits[FILLER],
        check: digits[CHECK],
    }
}

/// The first 12 digits, the input to the checksum.
pub(crate) fn payload(digits: &Digits) -> Payload {
    std::array::from_fn(|i| digits[i])
}

fn number(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |acc, &digit| acc * 10 + u16::from(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fields() {
        let digits = to_digits("8001014321087").unwrap();
        let raw = extract(&digits);
        assert_eq!(
            raw,
            RawFields {
                year: 80,
                month: 1,
                day: 1,
                sequence: 4321,
                citizenship: 0,
                filler: 8,
                check: 7,
            }
        );
    }

    #[test]
    fn test_extract_does_not_validate() {
        let digits = to_digits("9913990000000").unwrap();
        let raw = extract(&digits);
        assert_eq!(raw.month, 13);
        assert_eq!(raw.day, 99);
        assert_eq!(raw.sequence, 0);
    }

    #[test]
    fn test_wrong_length() {
        let err = to_digits("123456789012").unwrap_err();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("got 12 characters"));

        assert!(to_digits("12345678901234").is_err());
        assert!(to_digits("").is_err());
    }

    #[test]
    fn test_non_digit() {
        let err = to_digits("80010143210a7").unwrap_err();
        assert!(err.to_string().contains("position 11"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII.
        let input = "٨٠٠١٠١٤٣٢١٠٨٧";
        assert_eq!(input.chars().count(), 13);
        assert!(to_digits(input).unwrap_err().is_format_error());
    }

    #[test]
    fn test_payload_is_prefix() {
        let digits = to_digits("8001014321087").unwrap();
        assert_eq!(payload(&digits), [8, 0, 0, 1, 0, 1, 4, 3, 2, 1, 0, 8]);
    }
}
