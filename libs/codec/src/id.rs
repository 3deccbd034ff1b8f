//! The validated identifier type.

use crate::error::ValidationError;
use crate::fields::ValidatedFields;
use crate::normalize::normalize;
use crate::validate::{validate_with, ValidationMode};

/// A national identity number that is known to be valid.
///
/// Only obtainable by parsing (which validates) or by
/// [`generate`](crate::generate), so holding one is proof of validity.
/// The canonical form is 13 digits with no separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId {
    value: String,
    fields: ValidatedFields,
}

impl NationalId {
    /// Parses and validates in [`ValidationMode::Lax`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_with(raw, ValidationMode::Lax)
    }

    /// Parses and validates with the given mode.
    pub fn parse_with(raw: &str, mode: ValidationMode) -> Result<Self, ValidationError> {
        let fields = validate_with(raw, mode)?;
        Ok(Self {
            value: normalize(raw),
            fields,
        })
    }

    pub(crate) fn from_parts(value: String, fields: ValidatedFields) -> Self {
        Self { value, fields }
    }

    /// The canonical 13-digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The fields encoded in this identifier.
    #[must_use]
    pub const fn fields(&self) -> ValidatedFields {
        self.fields
    }

    /// Formats as `YYMMDD SSSS CAZ`, which parses back to the same identifier.
    #[must_use]
    pub fn to_grouped(&self) -> String {
        format!(
            "{} {} {}",
            &self.value[0..6],
            &self.value[6..10],
            &self.value[10..]
        )
    }

    /// Consumes the identifier, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl PartialOrd for NationalId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NationalId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for NationalId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.value
    }
}

impl serde::Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
