//! Semantic fields carried by an identifier, and their conventional readings.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Filler digit used when the caller does not supply one.
pub const DEFAULT_FILLER: u8 = 8;

/// Sequence blocks at or above this value are conventionally male.
const MALE_SEQUENCE_START: u16 = 5000;

/// The six semantic inputs of an identifier (everything but the check digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityFields {
    /// Two-digit birth year, 0-99.
    pub year: u8,
    /// Birth month, 1-12.
    pub month: u8,
    /// Birth day, 1-31.
    pub day: u8,
    /// Sequence block, 0-9999.
    pub sequence: u16,
    /// Citizenship digit.
    pub citizenship: u8,
    /// Legacy filler digit.
    #[serde(default = "default_filler")]
    pub filler: u8,
}

fn default_filler() -> u8 {
    DEFAULT_FILLER
}

impl IdentityFields {
    /// Creates fields with the default filler digit.
    #[must_use]
    pub const fn new(year: u8, month: u8, day: u8, sequence: u16, citizenship: u8) -> Self {
        Self {
            year,
            month,
            day,
            sequence,
            citizenship,
            filler: DEFAULT_FILLER,
        }
    }

    /// Replaces the filler digit.
    #[must_use]
    pub const fn with_filler(mut self, filler: u8) -> Self {
        self.filler = filler;
        self
    }

    /// Conventional sex reading of the sequence block.
    #[must_use]
    pub fn sex(&self) -> Sex {
        Sex::from_sequence(self.sequence)
    }

    /// Conventional reading of the citizenship digit, if it is 0 or 1.
    #[must_use]
    pub fn citizenship_status(&self) -> Option<Citizenship> {
        Citizenship::from_digit(self.citizenship)
    }

    /// Resolves the two-digit year against `reference` and returns the birth date.
    ///
    /// The century chosen is the latest one that does not put the birth date
    /// after `reference`. Returns `None` when month and day do not form a real
    /// calendar date in the resolved year.
    #[must_use]
    pub fn birth_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let century = reference.year().div_euclid(100) * 100;
        let year = i32::from(self.year);
        let month = u32::from(self.month);
        let day = u32::from(self.day);

        match NaiveDate::from_ymd_opt(century + year, month, day) {
            Some(date) if date <= reference => Some(date),
            _ => NaiveDate::from_ymd_opt(century - 100 + year, month, day),
        }
    }
}

/// Fields extracted from an identifier that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedFields {
    #[serde(flatten)]
    identity: IdentityFields,
    check_digit: u8,
}

impl ValidatedFields {
    pub(crate) const fn new(identity: IdentityFields, check_digit: u8) -> Self {
        Self {
            identity,
            check_digit,
        }
    }

    /// The semantic fields, suitable for feeding back into `generate`.
    #[must_use]
    pub const fn identity(&self) -> IdentityFields {
        self.identity
    }

    #[must_use]
    pub const fn year(&self) -> u8 {
        self.identity.year
    }

    #[must_use]
    pub const fn month(&self) -> u8 {
        self.identity.month
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.identity.day
    }

    #[must_use]
    pub const fn sequence(&self) -> u16 {
        self.identity.sequence
    }

    #[must_use]
    pub const fn citizenship(&self) -> u8 {
        self.identity.citizenship
    }

    #[must_use]
    pub const fn filler(&self) -> u8 {
        self.identity.filler
    }

    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// See [`IdentityFields::sex`].
    #[must_use]
    pub fn sex(&self) -> Sex {
        self.identity.sex()
    }

    /// See [`IdentityFields::citizenship_status`].
    #[must_use]
    pub fn citizenship_status(&self) -> Option<Citizenship> {
        self.identity.citizenship_status()
    }

    /// See [`IdentityFields::birth_date`].
    #[must_use]
    pub fn birth_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        self.identity.birth_date(reference)
    }
}

/// Sex category conventionally encoded by the sequence block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Sequence block 0000-4999.
    Female,
    /// Sequence block 5000-9999.
    Male,
}

impl Sex {
    #[must_use]
    pub const fn from_sequence(sequence: u16) -> Self {
        if sequence < MALE_SEQUENCE_START {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Inclusive sequence block range for this category.
    #[must_use]
    pub const fn sequence_range(&self) -> (u16, u16) {
        match self {
            Sex::Female => (0, MALE_SEQUENCE_START - 1),
            Sex::Male => (MALE_SEQUENCE_START, 9999),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            other => Err(format!("unknown sex '{other}', expected female or male")),
        }
    }
}

/// Citizenship classification encoded by digit 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

impl Citizenship {
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }

    #[must_use]
    pub const fn digit(&self) -> u8 {
        match self {
            Citizenship::Citizen => 0,
            Citizenship::PermanentResident => 1,
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Citizenship::Citizen => f.write_str("citizen"),
            Citizenship::PermanentResident => f.write_str("permanent resident"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_filler() {
        let fields = IdentityFields::new(90, 1, 1, 5009, 0);
        assert_eq!(fields.filler, DEFAULT_FILLER);
        assert_eq!(fields.with_filler(3).filler, 3);
    }

    #[test]
    fn test_sex_threshold() {
        assert_eq!(Sex::from_sequence(0), Sex::Female);
        assert_eq!(Sex::from_sequence(4999), Sex::Female);
        assert_eq!(Sex::from_sequence(5000), Sex::Male);
        assert_eq!(Sex::from_sequence(9999), Sex::Male);
        assert_eq!(IdentityFields::new(90, 1, 1, 5009, 0).sex(), Sex::Male);
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!("F".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_citizenship_digit() {
        assert_eq!(Citizenship::from_digit(0), Some(Citizenship::Citizen));
        assert_eq!(
            Citizenship::from_digit(1),
            Some(Citizenship::PermanentResident)
        );
        assert_eq!(Citizenship::from_digit(2), None);
        assert_eq!(Citizenship::PermanentResident.digit(), 1);
    }

    #[test]
    fn test_birth_date_century_resolution() {
        let reference = date(2026, 10, 16);
        let fields = IdentityFields::new(80, 1, 1, 4321, 0);
        assert_eq!(fields.birth_date(reference), Some(date(1980, 1, 1)));

        let fields = IdentityFields::new(5, 3, 14, 4321, 0);
        assert_eq!(fields.birth_date(reference), Some(date(2005, 3, 14)));

        // Same year as the reference but later in it: previous century.
        let fields = IdentityFields::new(26, 12, 31, 4321, 0);
        assert_eq!(fields.birth_date(reference), Some(date(1926, 12, 31)));

        let fields = IdentityFields::new(26, 10, 16, 4321, 0);
        assert_eq!(fields.birth_date(reference), Some(date(2026, 10, 16)));
    }

    #[test]
    fn test_birth_date_rejects_impossible_dates() {
        let reference = date(2026, 10, 16);
        assert_eq!(
            IdentityFields::new(80, 4, 31, 0, 0).birth_date(reference),
            None
        );
        assert_eq!(
            IdentityFields::new(81, 2, 29, 0, 0).birth_date(reference),
            None
        );
        assert_eq!(
            IdentityFields::new(0, 2, 29, 0, 0).birth_date(reference),
            Some(date(2000, 2, 29))
        );
    }

    #[test]
    fn test_identity_fields_json_defaults_filler() {
        let json = r#"{"year":90,"month":1,"day":1,"sequence":5009,"citizenship":0}"#;
        let fields: IdentityFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields, IdentityFields::new(90, 1, 1, 5009, 0));
    }

    #[test]
    fn test_validated_fields_json_is_flat() {
        let validated = ValidatedFields::new(IdentityFields::new(80, 1, 1, 4321, 0), 7);
        let value = serde_json::to_value(validated).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "year": 80,
                "month": 1,
                "day": 1,
                "sequence": 4321,
                "citizenship": 0,
                "filler": 8,
                "check_digit": 7
            })
        );
    }
}
