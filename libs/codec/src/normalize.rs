//! Input normalization.

/// Strips every space and hyphen from `raw`.
///
/// No other transformation is applied and nothing is rejected here; a result
/// of the wrong length or with stray characters fails the structural check.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators() {
        assert_eq!(normalize("800101 4321 087"), "8001014321087");
        assert_eq!(normalize("800101-4321-08-7"), "8001014321087");
        assert_eq!(normalize(" - "), "");
    }

    #[test]
    fn test_keeps_other_characters() {
        assert_eq!(normalize("80\t01a"), "80\t01a");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("12 34-56 -");
        assert_eq!(normalize(&once), once);
    }
}
