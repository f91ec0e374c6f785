//! Parsing of the "new stock" value typed by the user.

use stockroom_core::{DomainError, DomainResult};

/// Parse a stock quantity entered by the user.
///
/// Accepts a non-negative base-10 integer, surrounding whitespace allowed.
/// Signs, decimals, and trailing garbage are rejected.
pub fn parse_quantity(input: &str) -> DomainResult<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("quantity is empty"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "quantity '{}' is not a non-negative integer",
            trimmed
        )));
    }

    trimmed
        .parse::<i64>()
        .map_err(|e| DomainError::validation(format!("quantity '{}': {}", trimmed, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_integers() {
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity("42"), Ok(42));
        assert_eq!(parse_quantity("  7 "), Ok(7));
        assert_eq!(parse_quantity("007"), Ok(7));
    }

    #[test]
    fn rejects_negative_values() {
        let err = parse_quantity("-1").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative quantity"),
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        for input in ["abc", "", "   ", "3.5", "12abc", "+4", "1e3"] {
            assert!(parse_quantity(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_quantity("99999999999999999999").is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every non-negative i64 round-trips through its decimal form.
            #[test]
            fn accepts_every_non_negative_integer(n in 0i64..=i64::MAX) {
                prop_assert_eq!(parse_quantity(&n.to_string()), Ok(n));
            }

            /// Property: negative numbers are always rejected.
            #[test]
            fn rejects_every_negative_integer(n in i64::MIN..0i64) {
                prop_assert!(parse_quantity(&n.to_string()).is_err());
            }
        }
    }
}
