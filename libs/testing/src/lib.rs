//! # natid-testing
//!
//! Test-data tooling built on `natid-codec`.
//!
//! - [`FixtureBuilder`]: seeded, reproducible identifiers for fixtures and
//!   seed data. The same seed and constraints always yield the same sequence.
//! - [`strategies`]: `proptest` strategies for property tests.
//!
//! ```
//! use natid_codec::Sex;
//! use natid_testing::FixtureBuilder;
//!
//! let ids = FixtureBuilder::new(42).sex(Sex::Female).take(3).unwrap();
//! assert!(ids.iter().all(|id| id.fields().sex() == Sex::Female));
//! ```

mod fixtures;
pub mod strategies;

pub use fixtures::{days_in_month, FixtureBuilder, FixtureError};
