//! Error types for identifier validation and generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating an identifier.
///
/// Variants are ordered by the validation stage that produces them; the
/// first failing stage wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is not exactly 13 ASCII digits after normalization.
    #[error("invalid identifier format: {message}")]
    InvalidFormat { message: String },

    /// The month field is outside 01-12.
    #[error("invalid birth month: {month:02}")]
    InvalidMonth { month: u8 },

    /// The day field is outside 01-31, or (strict mode) past the end of the month.
    #[error("invalid birth day: {day:02}")]
    InvalidDay { day: u8 },

    /// The check digit does not match the one computed from the first 12 digits.
    #[error("checksum mismatch: expected check digit {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl ValidationError {
    /// Returns the stable kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ValidationError::InvalidMonth { .. } => ErrorKind::InvalidMonth,
            ValidationError::InvalidDay { .. } => ErrorKind::InvalidDay,
            ValidationError::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
        }
    }

    /// Returns true if the input failed the structural (13-digit) check.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ValidationError::InvalidFormat { .. })
    }

    /// Returns true if a date component was rejected.
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidMonth { .. } | ValidationError::InvalidDay { .. }
        )
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            message: message.into(),
        }
    }
}

/// Discriminant of a [`ValidationError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFormat,
    InvalidMonth,
    InvalidDay,
    ChecksumMismatch,
}

impl ErrorKind {
    /// Snake-case name, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::InvalidMonth => "invalid_month",
            ErrorKind::InvalidDay => "invalid_day",
            ErrorKind::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when generating an identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A field value does not fit its fixed-width slot.
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ChecksumMismatch).unwrap();
        assert_eq!(json, "\"checksum_mismatch\"");
        assert_eq!(ErrorKind::ChecksumMismatch.to_string(), "checksum_mismatch");
    }

    #[test]
    fn test_predicates() {
        assert!(ValidationError::format("x").is_format_error());
        assert!(ValidationError::InvalidMonth { month: 13 }.is_date_error());
        assert!(ValidationError::InvalidDay { day: 0 }.is_date_error());
        assert!(!ValidationError::ChecksumMismatch {
            expected: 7,
            actual: 5
        }
        .is_date_error());
    }

    #[test]
    fn test_display_pads_date_components() {
        let err = ValidationError::InvalidMonth { month: 0 };
        assert_eq!(err.to_string(), "invalid birth month: 00");
    }
}
