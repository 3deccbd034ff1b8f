//! Luhn check digit over the 12-digit payload.

use crate::layout::{CHECK, ID_LENGTH, PAYLOAD_LENGTH};

/// Computes the check digit for a 12-digit payload.
///
/// Each element must be a digit value in `0..=9`. Every second digit,
/// starting at index 1, is doubled (minus 9 when the result exceeds 9);
/// the check digit brings the total up to the next multiple of ten.
#[must_use]
pub fn check_digit(payload: &[u8; PAYLOAD_LENGTH]) -> u8 {
    debug_assert!(payload.iter().all(|&d| d <= 9));
    let sum = luhn_sum(payload);
    ((10 - sum % 10) % 10) as u8
}

/// Returns true if the last of 13 digit values is the check digit of the rest.
#[must_use]
pub fn is_checksum_valid(digits: &[u8; ID_LENGTH]) -> bool {
    let payload: [u8; PAYLOAD_LENGTH] = std::array::from_fn(|i| digits[i]);
    check_digit(&payload) == digits[CHECK]
}

fn luhn_sum(payload: &[u8; PAYLOAD_LENGTH]) -> u32 {
    payload
        .iter()
        .enumerate()
        .map(|(position, &digit)| {
            let digit = u32::from(digit);
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_payloads() {
        assert_eq!(check_digit(&[8, 0, 0, 1, 0, 1, 4, 3, 2, 1, 0, 8]), 7);
        assert_eq!(check_digit(&[9, 0, 0, 1, 0, 1, 5, 0, 0, 9, 0, 8]), 6);
        assert_eq!(check_digit(&[9, 9, 1, 2, 3, 1, 9, 9, 9, 9, 1, 8]), 8);
    }

    #[test]
    fn test_sum_multiple_of_ten_gives_zero() {
        // 1 + 0 + 9 = 10
        assert_eq!(check_digit(&[1, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(check_digit(&[0; PAYLOAD_LENGTH]), 0);
    }

    #[test]
    fn test_doubling_reduces_above_nine() {
        // Odd position 9 -> 18 -> 9; total 9, check digit 1.
        assert_eq!(luhn_sum(&[0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 9);
        assert_eq!(check_digit(&[0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 1);
        // Odd position 5 -> 10 -> 1.
        assert_eq!(luhn_sum(&[0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 1);
    }

    #[test]
    fn test_is_checksum_valid() {
        assert!(is_checksum_valid(&[8, 0, 0, 1, 0, 1, 4, 3, 2, 1, 0, 8, 7]));
        assert!(!is_checksum_valid(&[8, 0, 0, 1, 0, 1, 4, 3, 2, 1, 0, 8, 5]));
    }

    #[test]
    fn test_every_single_substitution_detected() {
        let payload = [8, 0, 0, 1, 0, 1, 4, 3, 2, 1, 0, 8];
        let original = check_digit(&payload);
        for position in 0..PAYLOAD_LENGTH {
            for replacement in 0..=9u8 {
                if replacement == payload[position] {
                    continue;
                }
                let mut altered = payload;
                altered[position] = replacement;
                assert_ne!(
                    check_digit(&altered),
                    original,
                    "substitution at {position} with {replacement} went undetected"
                );
            }
        }
    }
}
