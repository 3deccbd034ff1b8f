//! `proptest` strategies over identity fields and identifiers.

use natid_codec::{generate, IdentityFields, NationalId};
use proptest::prelude::*;

use crate::fixtures::days_in_month;

/// Any in-range field tuple, including days past the end of the month.
pub fn identity_fields() -> impl Strategy<Value = IdentityFields> {
    (0u8..=99, 1u8..=12, 1u8..=31, 0u16..=9999, 0u8..=9, 0u8..=9).prop_map(
        |(year, month, day, sequence, citizenship, filler)| {
            IdentityFields::new(year, month, day, sequence, citizenship).with_filler(filler)
        },
    )
}

/// Field tuples whose birth date exists on the calendar.
pub fn calendar_identity_fields() -> impl Strategy<Value = IdentityFields> {
    (0u8..=99, 1u8..=12)
        .prop_flat_map(|(year, month)| {
            (
                Just(year),
                Just(month),
                1..=days_in_month(year, month),
                0u16..=9999,
                0u8..=1,
                0u8..=9,
            )
        })
        .prop_map(|(year, month, day, sequence, citizenship, filler)| {
            IdentityFields::new(year, month, day, sequence, citizenship).with_filler(filler)
        })
}

/// Valid identifiers.
pub fn national_id() -> impl Strategy<Value = NationalId> {
    identity_fields().prop_filter_map("fields in range", |fields| generate(&fields).ok())
}
