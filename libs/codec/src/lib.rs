//! # natid-codec
//!
//! Parsing, validation, and generation of 13-digit national identity numbers.
//!
//! ## Identifier Layout
//!
//! ```text
//! YY MM DD SSSS C A Z
//! │  │  │  │    │ │ └─ check digit (Luhn over the first 12 digits)
//! │  │  │  │    │ └─── filler digit (legacy, not validated)
//! │  │  │  │    └───── citizenship (0 = citizen, 1 = permanent resident)
//! │  │  │  └────────── sequence block (0000-4999 female, 5000-9999 male)
//! │  │  └───────────── birth day
//! │  └──────────────── birth month
//! └─────────────────── birth year, century omitted
//! ```
//!
//! Example: `8001014321087`
//!
//! ## Design Principles
//!
//! - The codec is pure: no I/O, no global state, no environment lookups
//! - Validation is fail-fast and reports the first failing stage
//! - Generation is the exact inverse of validation (generate → validate → same fields)
//! - Default validation is lax about calendars; strict checks are opt-in
//!
//! ```
//! use natid_codec::{generate, validate, IdentityFields};
//!
//! let id = generate(&IdentityFields::new(90, 1, 1, 5009, 0)).unwrap();
//! assert_eq!(id.as_str(), "9001015009086");
//!
//! let fields = validate("900101 5009 086").unwrap();
//! assert_eq!(fields.identity(), IdentityFields::new(90, 1, 1, 5009, 0));
//! ```

mod checksum;
mod error;
mod fields;
mod generate;
mod id;
mod layout;
mod normalize;
mod validate;

pub use checksum::{check_digit, is_checksum_valid};
pub use error::{ErrorKind, GenerateError, ValidationError};
pub use fields::{Citizenship, IdentityFields, Sex, ValidatedFields, DEFAULT_FILLER};
pub use generate::generate;
pub use id::NationalId;
pub use layout::{ID_LENGTH, PAYLOAD_LENGTH};
pub use normalize::normalize;
pub use validate::{validate, validate_with, ValidationMode};
